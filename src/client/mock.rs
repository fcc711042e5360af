//! Mock OpsWorks API client for testing
//!
//! Provides a mock implementation of [`OpsWorksApi`] for unit testing
//! without making real API calls.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::models::{App, Stack};
use super::{ApiResult, OpsWorksApi};
use crate::error::ApiError;

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockOpsWorksClient::new()
///     .with_stacks(vec![StackBuilder::new("s-1").build()])
///     .await
///     .with_apps("s-1", vec![AppBuilder::new("a-1", "s-1").build()])
///     .await;
///
/// let apps = mock.list_apps("s-1").await?;
/// assert_eq!(apps.len(), 1);
/// ```
#[derive(Default)]
pub struct MockOpsWorksClient {
    /// Stacks to return from list_stacks
    stacks: Arc<Mutex<Vec<Stack>>>,
    /// Apps to return from list_apps, keyed by stack ID
    apps: Arc<Mutex<HashMap<String, Vec<App>>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Errors returned by list_apps for specific stacks
    stack_errors: Arc<Mutex<HashMap<String, ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Stack IDs passed to list_apps, in call order
    requested_stacks: Arc<Mutex<Vec<String>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_stacks: usize,
    pub list_apps: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.list_stacks + self.list_apps
    }
}

impl MockOpsWorksClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure stacks to return from list_stacks.
    pub async fn with_stacks(self, stacks: Vec<Stack>) -> Self {
        *self.stacks.lock().await = stacks;
        self
    }

    /// Configure apps to return from list_apps for one stack.
    pub async fn with_apps(self, stack_id: &str, apps: Vec<App>) -> Self {
        self.apps.lock().await.insert(stack_id.to_string(), apps);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Configure list_apps to fail for one stack.
    pub async fn with_stack_error(self, stack_id: &str, error: ApiError) -> Self {
        self.stack_errors
            .lock()
            .await
            .insert(stack_id.to_string(), error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Stack IDs passed to list_apps, in call order.
    pub async fn requested_stacks(&self) -> Vec<String> {
        self.requested_stacks.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> ApiResult<()> {
        let mut error = self.error.lock().await;
        match error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl OpsWorksApi for MockOpsWorksClient {
    async fn list_stacks(&self) -> ApiResult<Vec<Stack>> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.list_stacks += 1;
        drop(counts);

        Ok(self.stacks.lock().await.clone())
    }

    async fn list_apps(&self, stack_id: &str) -> ApiResult<Vec<App>> {
        self.requested_stacks
            .lock()
            .await
            .push(stack_id.to_string());
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.list_apps += 1;
        drop(counts);

        if let Some(err) = self.stack_errors.lock().await.remove(stack_id) {
            return Err(err);
        }

        Ok(self
            .apps
            .lock()
            .await
            .get(stack_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{AppBuilder, StackBuilder};

    #[tokio::test]
    async fn test_mock_returns_configured_stacks() {
        let mock = MockOpsWorksClient::new()
            .with_stacks(vec![StackBuilder::new("s-1").build()])
            .await;

        let stacks = mock.list_stacks().await.unwrap();
        assert_eq!(stacks.len(), 1);
        assert_eq!(mock.call_counts().await.list_stacks, 1);
    }

    #[tokio::test]
    async fn test_mock_apps_are_scoped_by_stack() {
        let mock = MockOpsWorksClient::new()
            .with_apps("s-1", vec![AppBuilder::new("a-1", "s-1").build()])
            .await;

        assert_eq!(mock.list_apps("s-1").await.unwrap().len(), 1);
        assert!(mock.list_apps("s-2").await.unwrap().is_empty());
        assert_eq!(mock.requested_stacks().await, vec!["s-1", "s-2"]);
    }

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockOpsWorksClient::new()
            .with_error(ApiError::Throttled)
            .await;

        assert!(mock.list_stacks().await.is_err());
        assert!(mock.list_stacks().await.is_ok());
        assert_eq!(mock.call_counts().await.total(), 1);
    }

    #[tokio::test]
    async fn test_mock_stack_error() {
        let mock = MockOpsWorksClient::new()
            .with_stack_error("s-2", ApiError::Forbidden)
            .await;

        assert!(mock.list_apps("s-1").await.is_ok());
        assert!(matches!(
            mock.list_apps("s-2").await,
            Err(ApiError::Forbidden)
        ));
    }
}
