//! OpsWorks API client

use async_trait::async_trait;

use crate::error::ApiError;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod opsworks;

#[cfg(test)]
pub use mock::MockOpsWorksClient;
pub use models::{App, Stack};
pub use opsworks::OpsWorksClient;

/// Result of a single OpsWorks API call
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Read-only listing operations against OpsWorks.
///
/// Each call returns the complete set; pagination, if the backend ever needs
/// it, is the implementation's concern.
#[async_trait]
pub trait OpsWorksApi: Send + Sync {
    /// List all stacks visible to the caller
    async fn list_stacks(&self) -> ApiResult<Vec<Stack>>;

    /// List the apps deployed in one stack
    async fn list_apps(&self, stack_id: &str) -> ApiResult<Vec<App>>;
}
