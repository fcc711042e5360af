//! Error types for opsworks-tf

use thiserror::Error;

/// Result type alias for opsworks-tf operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// OpsWorks API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Access denied. The endpoint rejected the request (is it signed?).")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Request throttled by the OpsWorks API")]
    Throttled,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Failures while walking stacks and their applications.
///
/// Any of these aborts the whole export.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Failed to list stacks: {0}")]
    ListStacks(#[source] ApiError),

    #[error("Failed to list apps for stack `{stack_id}`: {source}")]
    ListApps {
        stack_id: String,
        #[source]
        source: ApiError,
    },

    #[error("Stack at position {0} has no StackId; cannot list its apps")]
    MissingStackId(usize),
}

/// Failures while turning mapped records into resource blocks
#[derive(Debug, Error)]
pub enum EmitError {
    #[error(
        "App `{}` in stack `{}` has no name; cannot name its resource block",
        .app_id.as_deref().unwrap_or("<unknown>"),
        .stack_id.as_deref().unwrap_or("<unknown>")
    )]
    MissingName {
        app_id: Option<String>,
        stack_id: Option<String>,
    },

    #[error("Failed to encode resource `{name}`: {message}")]
    Encode { name: String, message: String },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
