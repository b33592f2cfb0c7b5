//! Direct REST client for the Gemini `generateContent` API.

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::AppConfig;
use crate::error::GatewayError;
use crate::llm::{CompletionProvider, CompletionRequest};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Provider implementation that talks to the Gemini HTTP API.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: SecretString,
    model: String,
}

impl GeminiClient {
    /// Build a client from application configuration.
    pub fn new(config: &AppConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| GatewayError::RequestFailed {
                reason: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    fn build_body(request: &CompletionRequest) -> GenerateContentRequest {
        let generation_config = request.response_schema.as_ref().map(|schema| {
            GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(schema.clone()),
            }
        });

        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config,
        }
    }

    async fn send_request(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> Result<String, GatewayError> {
        let url = format!(
            "{BASE_URL}/{model}:generateContent?key={key}",
            key = self.api_key.expose_secret()
        );

        let response = self.client.post(url).json(body).send().await.map_err(|e| {
            GatewayError::RequestFailed {
                reason: format!("Completion request failed: {e}"),
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse =
            response
                .json()
                .await
                .map_err(|e| GatewayError::InvalidResponse {
                    reason: format!("Failed to parse completion response: {e}"),
                })?;

        extract_text(parsed)
    }
}

#[async_trait]
impl CompletionProvider for GeminiClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
        let model = request.model.clone().unwrap_or_else(|| self.model.clone());
        let body = Self::build_body(&request);
        tracing::debug!(model = %model, schema = request.response_schema.is_some(), "Sending completion request");
        self.send_request(&model, &body).await
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn extract_text(response: GenerateContentResponse) -> Result<String, GatewayError> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or(GatewayError::EmptyReply)
}

fn map_http_error(status: StatusCode, body: String) -> GatewayError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GatewayError::AuthFailed,
        _ => {
            let message = serde_json::from_str::<ErrorWrapper>(&body)
                .map(|wrapper| {
                    let status_text = wrapper.error.status.unwrap_or_default();
                    let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
                    if status_text.is_empty() {
                        msg
                    } else {
                        format!("{status_text}: {msg}")
                    }
                })
                .unwrap_or(body);
            GatewayError::RequestFailed {
                reason: format!("HTTP {status}: {message}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_includes_schema_when_given() {
        let request = CompletionRequest::new("list things")
            .with_schema(serde_json::json!({"type": "ARRAY"}));
        let body = GeminiClient::build_body(&request);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "list things");
        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(json["generationConfig"]["responseSchema"]["type"], "ARRAY");
    }

    #[test]
    fn body_omits_generation_config_for_text_requests() {
        let request = CompletionRequest::new("explain things");
        let body = GeminiClient::build_body(&request);
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("generationConfig").is_none());
    }

    #[test]
    fn extract_text_takes_first_text_part() {
        let response = GenerateContentResponse {
            candidates: Some(vec![Candidate {
                content: Some(CandidateContent {
                    parts: vec![
                        CandidatePart { text: None },
                        CandidatePart {
                            text: Some("hello".to_string()),
                        },
                    ],
                }),
            }]),
        };
        assert_eq!(extract_text(response).unwrap(), "hello");
    }

    #[test]
    fn extract_text_fails_on_empty_candidates() {
        let response = GenerateContentResponse { candidates: None };
        assert!(matches!(
            extract_text(response),
            Err(GatewayError::EmptyReply)
        ));
    }

    #[test]
    fn http_errors_map_to_variants() {
        assert!(matches!(
            map_http_error(StatusCode::TOO_MANY_REQUESTS, String::new()),
            GatewayError::RateLimited
        ));
        assert!(matches!(
            map_http_error(StatusCode::FORBIDDEN, String::new()),
            GatewayError::AuthFailed
        ));

        let err = map_http_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error": {"message": "boom", "status": "INTERNAL"}}"#.to_string(),
        );
        match err {
            GatewayError::RequestFailed { reason } => {
                assert!(reason.contains("INTERNAL: boom"), "got: {reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
