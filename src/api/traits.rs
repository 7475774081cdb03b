//! Trait abstraction for the API client to enable mocking in tests

use async_trait::async_trait;

use super::client::{ApiError, ApiResponse, Endpoint};

/// API operations the pages depend on
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClientTrait: Send + Sync {
    /// Call an endpoint. Scripted failures come back as `Err`.
    async fn fetch(&self, endpoint: Endpoint) -> Result<ApiResponse, ApiError>;
}
