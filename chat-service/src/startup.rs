//! Application startup and lifecycle management.
//!
//! The provider is built once per execution environment (cold start) and
//! shared by every invocation the runtime delivers to it.

use crate::config::ChatConfig;
use crate::handler::{ChatHandler, MODEL_ID};
use crate::models::{InvocationEvent, Response};
use crate::services::{BedrockTextProvider, TextGenerationService};
use aws_config::BehaviorVersion;
use lambda_runtime::{service_fn, LambdaEvent};
use service_core::error::AppError;
use service_core::observability::TelemetryGuard;
use std::sync::Arc;
use tracing::Instrument;

/// Application container for managing the Lambda lifecycle.
pub struct Application {
    handler: ChatHandler,
    telemetry: TelemetryGuard,
}

impl Application {
    /// Build the application against Bedrock using the default AWS
    /// credential and region chain.
    pub async fn build(config: &ChatConfig) -> Self {
        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let provider = BedrockTextProvider::from_sdk_config(
            &sdk_config,
            config.bedrock.endpoint_url.as_deref(),
        );

        tracing::info!(
            model = MODEL_ID,
            region = ?sdk_config.region(),
            endpoint_override = ?config.bedrock.endpoint_url,
            "Initialized Bedrock text provider"
        );

        Self::with_provider(Arc::new(provider))
    }

    pub fn with_provider(provider: Arc<dyn TextGenerationService>) -> Self {
        Self {
            handler: ChatHandler::new(provider),
            telemetry: TelemetryGuard::disabled(),
        }
    }

    /// Flush spans through `telemetry` at the end of every invocation.
    pub fn with_telemetry(mut self, telemetry: TelemetryGuard) -> Self {
        self.telemetry = telemetry;
        self
    }

    pub fn handler(&self) -> &ChatHandler {
        &self.handler
    }

    /// Handle one event and flush its spans before the response is posted,
    /// since Lambda may freeze the environment right after.
    pub async fn invoke(&self, event: LambdaEvent<InvocationEvent>) -> Response {
        let span = tracing::info_span!("invocation", request_id = %event.context.request_id);
        let response = self.handler.handle(event.payload).instrument(span).await;

        self.telemetry.flush().await;
        response
    }

    /// Poll the Lambda runtime API for events until the environment is torn down.
    pub async fn run_until_stopped(self) -> Result<(), AppError> {
        let app = Arc::new(self);

        lambda_runtime::run(service_fn(move |event: LambdaEvent<InvocationEvent>| {
            let app = app.clone();
            async move { Ok::<Response, lambda_runtime::Error>(app.invoke(event).await) }
        }))
        .await
        .map_err(|e| AppError::RuntimeError(e.to_string()))
    }
}
