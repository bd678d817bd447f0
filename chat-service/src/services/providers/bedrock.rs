//! Amazon Bedrock Runtime provider.
//!
//! Sends the Titan request body through `InvokeModel` and hands the raw
//! response body back to the caller.

use super::{ProviderError, TextGenerationService};
use crate::models::GenerationRequest;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, SdkError};
use aws_sdk_bedrockruntime::operation::invoke_model::InvokeModelError;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Bedrock text provider.
///
/// The SDK client is cheap to clone and safe to share across invocations.
#[derive(Clone)]
pub struct BedrockTextProvider {
    client: Client,
}

impl BedrockTextProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the shared AWS config, optionally pointing it at
    /// a different endpoint.
    pub fn from_sdk_config(sdk_config: &SdkConfig, endpoint_url: Option<&str>) -> Self {
        let mut builder = aws_sdk_bedrockruntime::config::Builder::from(sdk_config);
        if let Some(url) = endpoint_url {
            builder = builder.endpoint_url(url);
        }

        Self::new(Client::from_conf(builder.build()))
    }
}

#[async_trait]
impl TextGenerationService for BedrockTextProvider {
    async fn generate(
        &self,
        model_id: &str,
        request: &GenerationRequest,
    ) -> Result<Vec<u8>, ProviderError> {
        let body = serde_json::to_vec(request)
            .map_err(|e| ProviderError::InvalidRequest(e.to_string()))?;

        tracing::debug!(
            model = %model_id,
            prompt_len = request.input_text.len(),
            "Sending request to Bedrock"
        );

        let output = self
            .client
            .invoke_model()
            .model_id(model_id)
            .content_type(JSON_CONTENT_TYPE)
            .accept(JSON_CONTENT_TYPE)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(output.body.into_inner())
    }
}

fn map_sdk_error<R>(err: SdkError<InvokeModelError, R>) -> ProviderError
where
    R: std::fmt::Debug + 'static,
{
    match &err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            ProviderError::NetworkError(DisplayErrorContext(&err).to_string())
        }
        SdkError::ServiceError(service_err) => match service_err.err() {
            InvokeModelError::ThrottlingException(_) => ProviderError::RateLimited,
            InvokeModelError::ValidationException(e) => {
                ProviderError::InvalidRequest(DisplayErrorContext(e).to_string())
            }
            other => ProviderError::ApiError(DisplayErrorContext(other).to_string()),
        },
        _ => ProviderError::ApiError(DisplayErrorContext(&err).to_string()),
    }
}
