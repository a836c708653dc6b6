//! Remote text generation.
//!
//! The pipeline only talks to [`CanComplete`]; [`openai::OpenAiChat`] is the
//! production backend and [`mock_chat::MockChat`] stands in for it in tests.

pub mod mock_chat;
pub mod openai;

use async_trait::async_trait;

pub use openai::{GeneratorConfig, OpenAiChat};

/// One system + user exchange sent to a chat model.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Every way remote generation can fail. Callers of the pipeline never see
/// these; they are logged and replaced by fallback templates.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("no API key configured")]
    MissingCredential,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("remote returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed completion envelope: {0}")]
    Envelope(String),
    #[error("unexpected output shape: {0}")]
    Shape(String),
}

/// Interface for chat models that return a single completion.
#[async_trait]
pub trait CanComplete: Send + Sync {
    /// Returns the model's reply text for `request`.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GenerationError>;
}
