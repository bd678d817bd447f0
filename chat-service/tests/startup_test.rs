//! Tests for application wiring.
//! Run with: cargo test -p chat-service --test startup_test

use chat_service::models::InvocationEvent;
use chat_service::services::{MockTextProvider, TextGenerationService};
use chat_service::startup::Application;
use lambda_runtime::{Context, LambdaEvent};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn application_routes_invocations_to_injected_provider() {
    let provider = Arc::new(MockTextProvider::with_json(&json!({
        "results": [{ "outputText": "from the mock" }]
    })));
    let app = Application::with_provider(provider.clone() as Arc<dyn TextGenerationService>);

    let response = app
        .handler()
        .handle(InvocationEvent::with_body("ping"))
        .await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "from the mock");
    assert_eq!(provider.calls().len(), 1);
}

#[tokio::test]
async fn cloned_handlers_share_one_provider() {
    let provider = Arc::new(MockTextProvider::with_json(&json!({
        "results": [{ "outputText": "ok" }]
    })));
    let app = Application::with_provider(provider.clone());

    let first = app.handler().clone();
    let second = app.handler().clone();
    let (a, b) = tokio::join!(
        first.handle(InvocationEvent::with_body("one")),
        second.handle(InvocationEvent::with_body("two")),
    );

    assert_eq!(a.status_code, 200);
    assert_eq!(b.status_code, 200);

    let mut inputs: Vec<String> = provider
        .calls()
        .into_iter()
        .map(|c| c.request.input_text)
        .collect();
    inputs.sort();
    assert_eq!(inputs, vec!["one".to_string(), "two".to_string()]);
}

#[tokio::test]
async fn invoke_handles_lambda_event_without_span_export() {
    let provider = Arc::new(MockTextProvider::with_json(&json!({
        "results": [{ "outputText": "pong" }]
    })));
    let app = Application::with_provider(provider.clone())
        .with_telemetry(service_core::observability::TelemetryGuard::disabled());

    let mut context = Context::default();
    context.request_id = "8476a536-e9f4-11e8-9739-2dfe598c3fcd".to_string();
    let response = app
        .invoke(LambdaEvent::new(InvocationEvent::with_body("ping"), context))
        .await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "pong");
    assert_eq!(provider.calls()[0].request.input_text, "ping");
}
