//! Report artifact rendering (CSV and HTML)

pub mod csv;
pub mod html;

pub use html::HtmlReport;

use chrono::{DateTime, Utc};

/// Timestamp format shared by both artifacts
pub fn fmt_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}
