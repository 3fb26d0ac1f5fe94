pub mod asset_detail;
pub mod asset_list;
pub mod not_found;
pub mod timeseries;
