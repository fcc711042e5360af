//! JSON envelope for listing output

use chrono::Utc;
use serde::Serialize;

/// Listing data wrapped with metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a, T> {
    pub data: &'a [T],
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// Number of rows in `data`
    pub count: usize,

    /// RFC 3339 generation time
    pub timestamp: String,

    /// CLI version
    pub version: &'static str,
}

impl<'a, T> JsonOutput<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Self {
            data,
            meta: Metadata {
                count: data.len(),
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION"),
            },
        }
    }
}

/// Format rows as a pretty-printed JSON envelope
pub fn format_json<T: Serialize>(rows: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(rows))
}
