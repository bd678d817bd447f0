//! Mock provider implementation for testing.

use super::{ProviderError, TextGenerationService};
use crate::models::GenerationRequest;
use async_trait::async_trait;
use std::sync::Mutex;

/// One call observed by [`MockTextProvider`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub model_id: String,
    pub request: GenerationRequest,
}

enum MockReply {
    Body(Vec<u8>),
    Error(ProviderError),
}

/// Mock text provider that replays a fixed reply and records every call.
pub struct MockTextProvider {
    reply: MockReply,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTextProvider {
    /// Reply with `body` as the raw response bytes.
    pub fn with_body(body: impl Into<Vec<u8>>) -> Self {
        Self {
            reply: MockReply::Body(body.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Reply with `value` serialized as JSON.
    pub fn with_json(value: &serde_json::Value) -> Self {
        Self::with_body(value.to_string())
    }

    /// Fail every call with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self {
            reply: MockReply::Error(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl TextGenerationService for MockTextProvider {
    async fn generate(
        &self,
        model_id: &str,
        request: &GenerationRequest,
    ) -> Result<Vec<u8>, ProviderError> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedCall {
                model_id: model_id.to_string(),
                request: request.clone(),
            });

        match &self.reply {
            MockReply::Body(body) => Ok(body.clone()),
            MockReply::Error(err) => Err(err.clone()),
        }
    }
}
