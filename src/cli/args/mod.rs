//! Shared CLI argument types

mod global;

pub use global::GlobalOptions;

/// Output format for listing commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - one row per entry
    #[default]
    Table,
    /// JSON format - structured for scripts
    Json,
}

/// Syntax for exported resource blocks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Terraform native syntax (`.tf`)
    #[default]
    Hcl,
    /// Terraform JSON syntax (`.tf.json`), one document per resource
    Json,
}
