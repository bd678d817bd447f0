use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const CORS_ORIGIN_HEADER: &str = "Access-Control-Allow-Origin";
pub const CORS_ALLOW_ANY: &str = "*";

const TEXT_PLAIN: &str = "text/plain";
const APPLICATION_JSON: &str = "application/json";
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// HTTP-shaped result handed back to the Lambda front door, which forwards
/// status, headers and body verbatim to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl Response {
    /// 200 carrying the generated text unchanged.
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            headers: headers(TEXT_PLAIN),
            body: text.into(),
        }
    }

    /// The single generic 500 returned for every failure.
    pub fn internal_error() -> Self {
        Self {
            status_code: 500,
            headers: headers(APPLICATION_JSON),
            body: json!({ "message": INTERNAL_ERROR_MESSAGE }).to_string(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

fn headers(content_type: &str) -> HashMap<String, String> {
    HashMap::from([
        (CONTENT_TYPE_HEADER.to_string(), content_type.to_string()),
        (CORS_ORIGIN_HEADER.to_string(), CORS_ALLOW_ANY.to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn ok_serializes_to_gateway_shape() {
        let value = serde_json::to_value(Response::ok("This is a test response")).unwrap();
        assert_eq!(
            value,
            json!({
                "statusCode": 200,
                "headers": {
                    "Content-Type": "text/plain",
                    "Access-Control-Allow-Origin": "*"
                },
                "body": "This is a test response"
            })
        );
    }

    #[test]
    fn internal_error_body_is_generic_json() {
        let response = Response::internal_error();
        assert_eq!(response.status_code, 500);
        assert_eq!(response.header(CONTENT_TYPE_HEADER), Some("application/json"));
        assert_eq!(response.header(CORS_ORIGIN_HEADER), Some("*"));

        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body, json!({ "message": "Internal server error" }));
    }

    #[test]
    fn ok_does_not_trim_text() {
        let response = Response::ok("\n  padded  \n");
        assert_eq!(response.body, "\n  padded  \n");
    }
}
