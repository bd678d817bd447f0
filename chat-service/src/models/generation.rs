//! Titan text request and response bodies.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub input_text: String,
    pub text_generation_config: TextGenerationConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextGenerationConfig {
    pub max_token_count: u32,
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    #[serde(default)]
    pub input_text_token_count: Option<u32>,
    pub results: Vec<GenerationOutput>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOutput {
    pub output_text: String,
    #[serde(default)]
    pub token_count: Option<u32>,
    #[serde(default)]
    pub completion_reason: Option<String>,
}

impl GenerationResult {
    /// First generated output, if the model returned any.
    pub fn first_output(&self) -> Option<&GenerationOutput> {
        self.results.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_with_titan_field_names() {
        let request = GenerationRequest {
            input_text: "hi".to_string(),
            text_generation_config: TextGenerationConfig {
                max_token_count: 512,
                temperature: 0.5,
            },
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "inputText": "hi",
                "textGenerationConfig": { "maxTokenCount": 512, "temperature": 0.5 }
            })
        );
    }

    #[test]
    fn full_titan_response_parses() {
        let body = json!({
            "inputTextTokenCount": 6,
            "results": [{
                "tokenCount": 9,
                "outputText": "Doing well, thanks.",
                "completionReason": "FINISH"
            }]
        });

        let result: GenerationResult = serde_json::from_value(body).unwrap();
        assert_eq!(result.input_text_token_count, Some(6));

        let output = result.first_output().unwrap();
        assert_eq!(output.output_text, "Doing well, thanks.");
        assert_eq!(output.token_count, Some(9));
        assert_eq!(output.completion_reason.as_deref(), Some("FINISH"));
    }

    #[test]
    fn minimal_response_parses() {
        let result: GenerationResult =
            serde_json::from_value(json!({ "results": [{ "outputText": "ok" }] })).unwrap();
        assert_eq!(result.first_output().unwrap().output_text, "ok");
        assert_eq!(result.input_text_token_count, None);
    }

    #[test]
    fn missing_results_is_rejected() {
        let parsed = serde_json::from_value::<GenerationResult>(json!({ "different_key": [] }));
        assert!(parsed.is_err());
    }

    #[test]
    fn empty_results_has_no_first_output() {
        let result: GenerationResult = serde_json::from_value(json!({ "results": [] })).unwrap();
        assert!(result.first_output().is_none());
    }
}
