use super::{CanComplete, CompletionRequest, GenerationError};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use tracing::{debug, trace};

/// Settings for the remote chat-completions backend.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Bearer token. `None` disables remote generation without error.
    pub api_key: Option<String>,
    /// Base URL such as `https://api.openai.com`.
    pub base_url: String,
    /// Model identifier like `gpt-3.5-turbo`.
    pub model: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com".into(),
            model: "gpt-3.5-turbo".into(),
        }
    }
}

/// Chat client for an OpenAI-compatible `/v1/chat/completions` endpoint.
#[derive(Clone, Debug)]
pub struct OpenAiChat {
    config: GeneratorConfig,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: Option<String>,
}

impl OpenAiChat {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl CanComplete for OpenAiChat {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GenerationError> {
        let Some(key) = self.config.api_key.as_deref() else {
            return Err(GenerationError::MissingCredential);
        };
        let url = self.endpoint();
        let body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": request.system},
                {"role": "user", "content": request.user}
            ],
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
        });
        trace!(target: "llm", %url, body = %body, "chat completion prompt");
        let resp = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {key}"))
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(GenerationError::Status(status));
        }
        let text = resp.text().await?;
        debug!(target: "llm", response = %text, "chat completion response");
        let completion: ChatCompletion =
            serde_json::from_str(&text).map_err(|e| GenerationError::Envelope(e.to_string()))?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| GenerationError::Envelope("no message content".into()))
    }
}
