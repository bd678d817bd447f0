//! Invocation handler: event in, HTTP-shaped response out.

use crate::models::{
    GenerationRequest, GenerationResult, InvocationEvent, Response, TextGenerationConfig,
};
use crate::services::{ProviderError, TextGenerationService};
use std::sync::Arc;
use thiserror::Error;

/// Bedrock model every request is sent to.
pub const MODEL_ID: &str = "amazon.titan-text-premier-v1:0";
pub const MAX_TOKEN_COUNT: u32 = 512;
pub const TEMPERATURE: f32 = 0.5;

/// Why a reply could not be produced. Never shown to the caller.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("model invocation failed: {0}")]
    Transport(#[from] ProviderError),

    #[error("unexpected model response: {0}")]
    ShapeMismatch(String),
}

#[derive(Clone)]
pub struct ChatHandler {
    provider: Arc<dyn TextGenerationService>,
}

impl ChatHandler {
    pub fn new(provider: Arc<dyn TextGenerationService>) -> Self {
        Self { provider }
    }

    /// Handle one invocation. Every failure becomes the generic 500.
    pub async fn handle(&self, event: InvocationEvent) -> Response {
        match self.generate_reply(event.text()).await {
            Ok(text) => Response::ok(text),
            Err(e) => {
                tracing::error!(error = %e, "error invoking bedrock model: {}", e);
                Response::internal_error()
            }
        }
    }

    /// Single attempt at the model call plus extraction of the first output.
    pub async fn generate_reply(&self, text: &str) -> Result<String, GenerationError> {
        let request = build_request(text);
        let body = self.provider.generate(MODEL_ID, &request).await?;
        extract_output_text(&body)
    }
}

pub fn build_request(text: &str) -> GenerationRequest {
    GenerationRequest {
        input_text: text.to_string(),
        text_generation_config: TextGenerationConfig {
            max_token_count: MAX_TOKEN_COUNT,
            temperature: TEMPERATURE,
        },
    }
}

fn extract_output_text(body: &[u8]) -> Result<String, GenerationError> {
    let result: GenerationResult = serde_json::from_slice(body)
        .map_err(|e| GenerationError::ShapeMismatch(format!("failed to parse response: {}", e)))?;

    let input_tokens = result.input_text_token_count;
    let output = result
        .results
        .into_iter()
        .next()
        .ok_or_else(|| GenerationError::ShapeMismatch("response contained no results".into()))?;

    tracing::debug!(
        input_tokens = ?input_tokens,
        output_tokens = ?output.token_count,
        completion_reason = ?output.completion_reason,
        "Bedrock response received"
    );

    Ok(output.output_text)
}
