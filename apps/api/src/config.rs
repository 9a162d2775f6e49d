use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_MODEL: &str = "llama-3.1-70b-versatile";
const DEFAULT_MAX_RETRIES: u32 = 2;
const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Application configuration loaded from environment variables.
/// Startup fails if `GROQ_API_KEY` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub groq_model: String,
    pub groq_api_url: String,
    pub llm_max_retries: u32,
    /// `None` means the model client never times out a request.
    pub llm_timeout: Option<Duration>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            groq_model: optional_env("GROQ_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            groq_api_url: optional_env("GROQ_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            llm_max_retries: parse_retries(optional_env("LLM_MAX_RETRIES"))?,
            llm_timeout: parse_timeout(optional_env("LLM_TIMEOUT_SECS"))?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_retries(value: Option<String>) -> Result<u32> {
    Ok(value
        .map(|v| v.trim().parse::<u32>())
        .transpose()
        .context("LLM_MAX_RETRIES must be a non-negative integer")?
        .unwrap_or(DEFAULT_MAX_RETRIES))
}

/// Unset means no timeout at all.
fn parse_timeout(value: Option<String>) -> Result<Option<Duration>> {
    Ok(value
        .map(|v| v.trim().parse::<u64>())
        .transpose()
        .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?
        .map(Duration::from_secs))
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_env_unset_is_error() {
        let err = require_env("COLDMAIL_TEST_REQUIRED_UNSET").unwrap_err();
        assert!(err.to_string().contains("COLDMAIL_TEST_REQUIRED_UNSET"));
    }

    #[test]
    fn test_require_env_blank_is_error() {
        std::env::set_var("COLDMAIL_TEST_REQUIRED_BLANK", "   ");
        assert!(require_env("COLDMAIL_TEST_REQUIRED_BLANK").is_err());
    }

    #[test]
    fn test_require_env_set() {
        std::env::set_var("COLDMAIL_TEST_REQUIRED_SET", "gsk_123");
        assert_eq!(require_env("COLDMAIL_TEST_REQUIRED_SET").unwrap(), "gsk_123");
    }

    #[test]
    fn test_optional_env_unset_blank_and_set() {
        assert_eq!(optional_env("COLDMAIL_TEST_OPTIONAL_UNSET"), None);

        std::env::set_var("COLDMAIL_TEST_OPTIONAL_BLANK", "");
        assert_eq!(optional_env("COLDMAIL_TEST_OPTIONAL_BLANK"), None);

        std::env::set_var("COLDMAIL_TEST_OPTIONAL_SET", "llama-3.1-8b-instant");
        assert_eq!(
            optional_env("COLDMAIL_TEST_OPTIONAL_SET").as_deref(),
            Some("llama-3.1-8b-instant")
        );
    }

    #[test]
    fn test_retries_default_to_two() {
        assert_eq!(parse_retries(None).unwrap(), 2);
        assert_eq!(parse_retries(Some("5".to_string())).unwrap(), 5);
        assert!(parse_retries(Some("-1".to_string())).is_err());
    }

    #[test]
    fn test_timeout_unset_means_none() {
        assert_eq!(parse_timeout(None).unwrap(), None);
        assert_eq!(
            parse_timeout(Some("30".to_string())).unwrap(),
            Some(Duration::from_secs(30))
        );
        assert!(parse_timeout(Some("soon".to_string())).is_err());
    }
}
