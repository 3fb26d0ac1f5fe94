use std::str::Utf8Error;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

pub const ASSETS: &str = "/assets";
pub const TIME_SERIES: &str = "/timeseries";

/// Everything `encodeURIComponent` escapes.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Link target of an asset's detail page.
pub fn asset_href(name: &str) -> String {
    format!("{ASSETS}/{}", utf8_percent_encode(name, COMPONENT))
}

/// Decode the `:name` route parameter. Absent or empty means there is
/// nothing to look up; escapes that do not decode to UTF-8 are an error.
pub fn decode_name_param(raw: Option<&str>) -> Result<Option<String>, Utf8Error> {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return Ok(None);
    };
    Ok(Some(percent_decode_str(raw).decode_utf8()?.into_owned()))
}

/// The header entry to highlight for `pathname`.
pub fn nav_section(pathname: &str) -> Option<&'static str> {
    [ASSETS, TIME_SERIES].into_iter().find(|section| {
        pathname
            .strip_prefix(*section)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}
