//! Configuration types.
//!
//! Everything is read from the process environment. A `.env` file is loaded
//! by the binaries before these constructors run.

use secrecy::SecretString;

use crate::error::ConfigError;

/// Default system prompt sent ahead of every proxied message.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a compassionate AI therapist...";

/// Default chat-completion model for the proxy.
pub const DEFAULT_MODEL: &str = "gpt-5-mini";

/// Default base URL of the OpenAI-compatible API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Listen address shared by both services.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Build from `MINDMATE_HOST` / `MINDMATE_PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("MINDMATE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("MINDMATE_PORT") {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
            key: "MINDMATE_PORT".to_string(),
            message: format!("{raw:?} is not a valid port ({e})"),
        })
}

/// Settings for the LLM proxy service.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Bearer credential for the upstream API. May be empty; the upstream
    /// call then fails with an auth error.
    pub api_key: SecretString,
    pub model: String,
    pub base_url: String,
    pub system_prompt: String,
}

impl ProxyConfig {
    /// Build from environment variables.
    ///
    /// | Env var                  | Default                      |
    /// |--------------------------|------------------------------|
    /// | `OPENAI_API_KEY`         | empty                        |
    /// | `OPENAI_MODEL`           | `gpt-5-mini`                 |
    /// | `OPENAI_BASE_URL`        | `https://api.openai.com/v1`  |
    /// | `MINDMATE_SYSTEM_PROMPT` | [`DEFAULT_SYSTEM_PROMPT`]    |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. An empty API key counts as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| {
                tracing::warn!("OPENAI_API_KEY not set; upstream requests will be rejected");
                String::new()
            });

        Self {
            api_key: SecretString::from(api_key),
            model: lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: lookup("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            system_prompt: lookup("MINDMATE_SYSTEM_PROMPT")
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
        }
    }
}
