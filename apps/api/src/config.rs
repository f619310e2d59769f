use std::time::Duration;

use anyhow::{ensure, Context, Result};

const DEFAULT_LLM_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_LLM_MODEL: &str = "llama3-8b-8192";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmConfig,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

/// Everything the completion client needs. Injected into `LlmClient::new`,
/// so nothing below `main` reads the environment.
#[derive(Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// Kept low so the model sticks to the schema.
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
    /// Transport-level attempts on 429 / 5xx. Always at least 1.
    pub max_attempts: u32,
    /// Ask the provider for a JSON-object response format.
    pub json_mode: bool,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .field("max_attempts", &self.max_attempts)
            .field("json_mode", &self.json_mode)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let temperature = parse_env("LLM_TEMPERATURE", 0.1_f32)?;
        ensure!(
            (0.0..=2.0).contains(&temperature),
            "LLM_TEMPERATURE must be between 0 and 2, got {temperature}"
        );

        let max_attempts = parse_env("LLM_MAX_ATTEMPTS", 3_u32)?;
        ensure!(max_attempts >= 1, "LLM_MAX_ATTEMPTS must be at least 1");

        Ok(Config {
            llm: LlmConfig {
                api_key: require_env("GROQ_API_KEY")?,
                base_url: std::env::var("LLM_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_LLM_BASE_URL.to_string())
                    .trim_end_matches('/')
                    .to_string(),
                model: std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string()),
                temperature,
                max_tokens: parse_env("LLM_MAX_TOKENS", 4096_u32)?,
                timeout: Duration::from_secs(parse_env("LLM_TIMEOUT_SECS", 120_u64)?),
                max_attempts,
                json_mode: parse_env("LLM_JSON_MODE", true)?,
            },
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            port: parse_env("PORT", 8080_u16)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Reads an optional variable, falling back to `default` when unset.
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}
