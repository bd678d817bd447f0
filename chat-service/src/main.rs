use chat_service::config::{log_load_error, ChatConfig};
use chat_service::startup::Application;
use service_core::observability::init_tracing;

const SERVICE_NAME: &str = "chat-service";

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    let config = match ChatConfig::load() {
        Ok(config) => config,
        Err(e) => {
            // Fall back to the default level so the failure still reaches the JSON logger.
            init_tracing(SERVICE_NAME, "info", None)?;
            return Err(log_load_error(e).into());
        }
    };

    let telemetry = init_tracing(
        SERVICE_NAME,
        &config.common.log_level,
        config.telemetry.otlp_endpoint.as_deref(),
    )?;

    let app = Application::build(&config)
        .await
        .with_telemetry(telemetry.clone());

    let result = app.run_until_stopped().await;
    telemetry.shutdown().await;

    result.map_err(|e| {
        tracing::error!("Lambda runtime error: {}", e);
        e.into()
    })
}
