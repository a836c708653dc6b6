use clap::Parser;
use std::time::Duration;

use crate::avatar::AvatarStyle;
use crate::llm::GeneratorConfig;

/// Command line arguments for the vent server.
#[derive(Parser, Clone, Debug)]
#[command(name = "vent", about = "Serves cathartic comments and email replies")]
pub struct Args {
    #[arg(long, env = "VENT_HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(long, env = "VENT_PORT", default_value_t = 3000)]
    pub port: u16,
    /// Chat-completions API key. Without one every request uses the templates.
    #[arg(long = "api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    #[arg(long = "base-url", env = "OPENAI_BASE_URL", default_value = "https://api.openai.com")]
    pub base_url: String,
    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-3.5-turbo")]
    pub model: String,
    #[arg(long = "avatar-style", env = "VENT_AVATAR_STYLE", value_enum, default_value_t = AvatarStyle::Portrait)]
    pub avatar_style: AvatarStyle,
    /// Pause between comments on the streaming endpoint.
    #[arg(long = "reveal-delay-ms", env = "VENT_REVEAL_DELAY_MS", default_value_t = 1000)]
    pub reveal_delay_ms: u64,
}

impl Args {
    /// Remote generation settings; a blank key counts as no key.
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            api_key: self
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
        }
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
