//! Text generation provider abstraction.
//!
//! The handler depends on [`TextGenerationService`] rather than on a concrete
//! SDK client, so the Bedrock backend can be swapped for the mock in tests.

pub mod bedrock;
pub mod mock;

use crate::models::GenerationRequest;
use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// A hosted text generation model.
#[async_trait]
pub trait TextGenerationService: Send + Sync {
    /// Invoke `model_id` with `request` and return the raw response body.
    async fn generate(
        &self,
        model_id: &str,
        request: &GenerationRequest,
    ) -> Result<Vec<u8>, ProviderError>;
}
