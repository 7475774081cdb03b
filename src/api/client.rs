//! Fixture-backed API client
//!
//! Serves the bundled `fakeapi.json` verbatim. There is no query or filter
//! logic; one endpoint is scripted to always fail so learners can practice
//! handling an error response.

use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::traits::ApiClientTrait;

/// Fixture compiled into the binary
pub const EMBEDDED_FIXTURE: &str = include_str!("../../assets/api/fakeapi.json");

/// One sample user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiRecord {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub registered: NaiveDate,
}

#[derive(Debug, Deserialize)]
struct FixtureFile {
    users: Vec<ApiRecord>,
}

/// Endpoints the API page can call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Users,
    /// Always answers with a scripted server error
    Broken,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Users => "/api/fakeapi.json",
            Self::Broken => "/api/broken",
        }
    }
}

/// Successful fixture response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub records: Vec<ApiRecord>,
    /// Fixture text exactly as stored
    pub body: String,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{status} {message}")]
    Scripted { status: u16, message: String },
}

/// In-memory API over the parsed fixture
#[derive(Debug, Clone)]
pub struct FixtureApi {
    records: Vec<ApiRecord>,
    body: String,
}

impl FixtureApi {
    /// Parse a fixture document
    pub fn from_json(body: &str) -> Result<Self> {
        let file: FixtureFile = serde_json::from_str(body)?;
        Ok(Self {
            records: file.users,
            body: body.to_string(),
        })
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_FIXTURE)
    }

    /// Read a fixture override from disk
    pub async fn from_path(path: &Path) -> Result<Self> {
        let body = tokio::fs::read_to_string(path).await?;
        Self::from_json(&body)
    }

    /// Load the override if configured, falling back to the embedded fixture
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            match Self::from_path(path).await {
                Ok(api) => {
                    tracing::info!("Loaded API fixture from {}", path.display());
                    return Ok(api);
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to load API fixture {}: {e}; using embedded fixture",
                        path.display()
                    );
                }
            }
        }
        Self::embedded()
    }

    pub fn records(&self) -> &[ApiRecord] {
        &self.records
    }
}

#[async_trait]
impl ApiClientTrait for FixtureApi {
    async fn fetch(&self, endpoint: Endpoint) -> std::result::Result<ApiResponse, ApiError> {
        tracing::debug!("GET {}", endpoint.path());
        match endpoint {
            Endpoint::Users => Ok(ApiResponse {
                status: 200,
                records: self.records.clone(),
                body: self.body.clone(),
            }),
            Endpoint::Broken => Err(ApiError::Scripted {
                status: 500,
                message: "Internal Server Error".to_string(),
            }),
        }
    }
}
