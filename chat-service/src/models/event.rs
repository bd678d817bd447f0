use serde::Deserialize;
use serde_json::Value;

/// Event delivered by the Lambda front door.
///
/// Only `body` is read. Any other fields of the event are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct InvocationEvent {
    #[serde(default)]
    pub body: Option<Value>,
}

impl InvocationEvent {
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(Value::String(body.into())),
        }
    }

    /// The user message, or `""` when `body` is absent or not a string.
    pub fn text(&self) -> &str {
        self.body.as_ref().and_then(Value::as_str).unwrap_or("")
    }
}
