//! OpsWorks JSON API client implementation
//!
//! Speaks the AWS JSON 1.1 protocol: every operation is a `POST /` with an
//! `X-Amz-Target` header naming the action. Requests are not signed.

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::{ApiResult, App, OpsWorksApi, Stack};
use crate::error::ApiError;

/// Service prefix for `X-Amz-Target`
const TARGET_PREFIX: &str = "OpsWorks_20130218";

/// Content type of the AWS JSON 1.1 protocol
const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Default client-side request rate
pub const DEFAULT_REQUESTS_PER_SECOND: u32 = 5;

/// Regional OpsWorks endpoint
pub fn default_endpoint(region: &str) -> String {
    format!("https://opsworks.{}.amazonaws.com", region)
}

/// OpsWorks API client
pub struct OpsWorksClient {
    http: HttpClient,
    endpoint: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

/// AWS error body (`{"__type": "...", "message": "..."}`)
#[derive(Debug, Deserialize)]
struct AwsErrorBody {
    #[serde(rename = "__type", default)]
    error_type: Option<String>,
    #[serde(alias = "Message", default)]
    message: Option<String>,
}

impl AwsErrorBody {
    /// Error code without the optional `namespace#` prefix
    fn code(&self) -> &str {
        let raw = self.error_type.as_deref().unwrap_or_default();
        raw.rsplit('#').next().unwrap_or(raw)
    }

    fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl OpsWorksClient {
    /// Create a new client for `endpoint`, issuing at most
    /// `requests_per_second` calls per second.
    pub fn new(endpoint: impl Into<String>, requests_per_second: u32) -> ApiResult<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let rate = NonZeroU32::new(requests_per_second)
            .or(NonZeroU32::new(DEFAULT_REQUESTS_PER_SECOND))
            .unwrap_or(NonZeroU32::MIN);
        let rate_limiter = Arc::new(RateLimiter::direct(Quota::per_second(rate)));

        Ok(Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            rate_limiter,
        })
    }

    /// Endpoint this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Invoke an OpsWorks action and decode its response body
    async fn call<T: DeserializeOwned>(&self, action: &str, body: Value) -> ApiResult<T> {
        self.rate_limiter.until_ready().await;

        let target = format!("{}.{}", TARGET_PREFIX, action);
        debug!("POST {} ({})", self.endpoint, target);

        let response = self
            .http
            .post(format!("{}/", self.endpoint))
            .header("X-Amz-Target", &target)
            .header("Content-Type", CONTENT_TYPE)
            .body(body.to_string())
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        let text = response.text().await.map_err(ApiError::from)?;

        if status == StatusCode::OK {
            return serde_json::from_str(&text).map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse {} response: {}", action, e))
            });
        }

        Err(error_from_response(status, &text))
    }
}

/// Map a non-200 response to an `ApiError`, using the AWS error code when present
fn error_from_response(status: StatusCode, text: &str) -> ApiError {
    let body: AwsErrorBody = serde_json::from_str(text).unwrap_or(AwsErrorBody {
        error_type: None,
        message: None,
    });

    match body.code() {
        "ResourceNotFoundException" => {
            return ApiError::NotFound(body.message_or("Resource not found"));
        }
        "ValidationException" => return ApiError::BadRequest(body.message_or("Validation failed")),
        "ThrottlingException" => return ApiError::Throttled,
        "AccessDeniedException" | "UnrecognizedClientException" | "MissingAuthenticationToken" => {
            return ApiError::Forbidden;
        }
        _ => {}
    }

    match status {
        StatusCode::FORBIDDEN | StatusCode::UNAUTHORIZED => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound(body.message_or("Resource not found")),
        StatusCode::TOO_MANY_REQUESTS => ApiError::Throttled,
        StatusCode::BAD_REQUEST => ApiError::BadRequest(body.message_or(text)),
        status if status.is_server_error() => {
            ApiError::ServerError(body.message_or(&format!("Server error: {}", status)))
        }
        _ => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
    }
}

#[async_trait]
impl OpsWorksApi for OpsWorksClient {
    async fn list_stacks(&self) -> ApiResult<Vec<Stack>> {
        #[derive(Deserialize)]
        #[serde(rename_all = "PascalCase")]
        struct DescribeStacksResponse {
            #[serde(default)]
            stacks: Vec<Stack>,
        }

        let response: DescribeStacksResponse = self.call("DescribeStacks", json!({})).await?;
        Ok(response.stacks)
    }

    async fn list_apps(&self, stack_id: &str) -> ApiResult<Vec<App>> {
        #[derive(Deserialize)]
        #[serde(rename_all = "PascalCase")]
        struct DescribeAppsResponse {
            #[serde(default)]
            apps: Vec<App>,
        }

        let response: DescribeAppsResponse = self
            .call("DescribeApps", json!({ "StackId": stack_id }))
            .await?;
        Ok(response.apps)
    }
}
