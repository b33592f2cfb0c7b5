//! Completion provider abstraction.
//!
//! The advisory gateway talks to the remote model through the
//! [`CompletionProvider`] trait so tests can substitute a scripted stub.
//! The production implementation is [`GeminiClient`], a direct REST client
//! for the `generateContent` endpoint.

pub mod gemini;
pub mod schema;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::GatewayError;

/// A single-turn completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// The full instruction prompt.
    pub prompt: String,
    /// When set, the provider is constrained to reply with JSON matching
    /// this schema; when absent the reply is free-form text.
    pub response_schema: Option<Value>,
    /// Overrides the provider's default model for this request.
    pub model: Option<String>,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: None,
            model: None,
        }
    }

    pub fn with_schema(mut self, schema: Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Transport to a text/JSON completion endpoint.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// The default model this provider sends requests to.
    fn model_name(&self) -> &str;

    /// Execute one completion request, returning the reply text.
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError>;
}
