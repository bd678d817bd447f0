use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub common: core_config::Config,
    pub telemetry: TelemetryConfig,
    pub bedrock: BedrockConfig,
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// OTLP collector endpoint; spans are only exported when set.
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BedrockConfig {
    /// Override for the Bedrock Runtime endpoint (local emulators, VPC endpoints).
    pub endpoint_url: Option<String>,
}

impl ChatConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        Ok(ChatConfig {
            common: common_config,
            telemetry: TelemetryConfig {
                otlp_endpoint: get_optional_env("OTLP_ENDPOINT"),
            },
            bedrock: BedrockConfig {
                endpoint_url: get_optional_env("BEDROCK_ENDPOINT_URL"),
            },
        })
    }
}

/// Log a configuration failure through the current subscriber and hand it back.
pub fn log_load_error(err: AppError) -> AppError {
    tracing::error!("Failed to load configuration: {}", err);
    err
}

fn get_optional_env(key: &str) -> Option<String> {
    non_empty(env::var(key).ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
