//! Image URL extraction
//!
//! Image cells hold a spreadsheet formula or descriptive text with an
//! embedded asset URL; only the URL itself is exported.

use once_cell::sync::Lazy;
use regex::Regex;

static PNG_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https.+?\.png").expect("invalid png url pattern"));

/// Extract the first ".png" URL embedded in a cell, if any
pub fn extract_png_url(raw: &str) -> Option<&str> {
    PNG_URL_RE.find(raw).map(|m| m.as_str())
}
