//! Mock API backed by the static `fakeapi.json` fixture

mod client;
mod traits;

pub use client::{ApiError, ApiRecord, ApiResponse, Endpoint, FixtureApi};
pub use traits::ApiClientTrait;

#[cfg(test)]
pub use traits::MockApiClientTrait;
