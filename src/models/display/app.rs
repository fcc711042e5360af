//! Application display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{or_missing, truncate_string};
use crate::client::models::App;

/// Longest name shown in the table before truncation
const NAME_WIDTH: usize = 40;

/// Application display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AppDisplay {
    #[tabled(rename = "APP ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "TYPE")]
    pub app_type: String,

    #[tabled(rename = "STACK ID")]
    pub stack_id: String,

    /// Whether SSL is enabled
    #[tabled(rename = "SSL")]
    pub ssl: String,

    #[tabled(rename = "DOMAINS")]
    pub domains: usize,
}

impl From<&App> for AppDisplay {
    fn from(app: &App) -> Self {
        Self {
            id: or_missing(app.app_id.as_deref()),
            name: truncate_string(&or_missing(app.name.as_deref()), NAME_WIDTH),
            app_type: or_missing(app.app_type.as_deref()),
            stack_id: or_missing(app.stack_id.as_deref()),
            ssl: match app.enable_ssl {
                Some(true) => "\u{2713}".to_string(), // checkmark
                Some(false) => "".to_string(),
                None => "-".to_string(),
            },
            domains: app.domains.as_ref().map_or(0, Vec::len),
        }
    }
}
