pub mod area_chart;
pub mod header;
pub mod status;
