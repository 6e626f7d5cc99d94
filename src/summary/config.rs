use std::time::Duration;

use crate::error::{Result, SummarizerError};

pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

struct KnownProvider {
    name: &'static str,
    endpoint: &'static str,
    model: &'static str,
    api_key_env: &'static str,
}

const KNOWN_PROVIDERS: &[KnownProvider] = &[
    KnownProvider {
        name: "groq",
        endpoint: "https://api.groq.com/openai/v1",
        model: "moonshotai/kimi-k2-instruct",
        api_key_env: "GROQ_API_KEY",
    },
    KnownProvider {
        name: "openai",
        endpoint: "https://api.openai.com/v1",
        model: "gpt-4o",
        api_key_env: "OPENAI_API_KEY",
    },
    KnownProvider {
        name: "local",
        endpoint: "http://localhost:11434/v1",
        model: "llama3.1",
        api_key_env: "LOCAL_LLM_API_KEY",
    },
];

/// Runtime configuration for an OpenAI-compatible chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub provider: String,
    pub model: String,
    pub endpoint: String,
    pub api_key_env: String,
    pub api_key: Option<String>,
    pub temperature: f32,
    pub timeout: Duration,
}

impl ProviderConfig {
    /// Defaults for a known provider name (case-insensitive).
    pub fn for_provider(provider: &str) -> Result<Self> {
        let normalized = provider.trim().to_ascii_lowercase();
        let known = KNOWN_PROVIDERS
            .iter()
            .find(|p| p.name == normalized)
            .ok_or_else(|| {
                let names: Vec<&str> = KNOWN_PROVIDERS.iter().map(|p| p.name).collect();
                SummarizerError::Initialization(format!(
                    "unknown provider `{}` (expected one of: {})",
                    provider,
                    names.join(", ")
                ))
            })?;

        Ok(Self {
            provider: known.name.to_string(),
            model: known.model.to_string(),
            endpoint: known.endpoint.to_string(),
            api_key_env: known.api_key_env.to_string(),
            api_key: None,
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_api_key_env(mut self, name: impl Into<String>) -> Self {
        self.api_key_env = name.into();
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fills `api_key` from the configured environment variable unless one is
    /// already set. Blank values count as missing.
    pub fn load_api_key_from_env(mut self) -> Self {
        if self.api_key.is_none() {
            self.api_key = std::env::var(&self.api_key_env)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty());
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(SummarizerError::Initialization("model name is empty".to_string()));
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(SummarizerError::Initialization(format!(
                "endpoint must be an http(s) URL, got `{}`",
                self.endpoint
            )));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(SummarizerError::Initialization(format!(
                "temperature {} is outside 0.0..=2.0",
                self.temperature
            )));
        }
        if self.timeout.is_zero() {
            return Err(SummarizerError::Initialization("timeout must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groq_defaults() {
        let config = ProviderConfig::for_provider("groq").unwrap();
        assert_eq!(config.endpoint, "https://api.groq.com/openai/v1");
        assert_eq!(config.model, "moonshotai/kimi-k2-instruct");
        assert_eq!(config.api_key_env, "GROQ_API_KEY");
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_provider_name_is_case_insensitive() {
        let config = ProviderConfig::for_provider(" OpenAI ").unwrap();
        assert_eq!(config.provider, "openai");
        assert_eq!(config.api_key_env, "OPENAI_API_KEY");
    }

    #[test]
    fn test_unknown_provider() {
        let err = ProviderConfig::for_provider("acme").err().unwrap();
        assert!(matches!(err, SummarizerError::Initialization(_)));
        assert!(err.to_string().contains("groq"));
    }

    #[test]
    fn test_overrides() {
        let config = ProviderConfig::for_provider("local")
            .unwrap()
            .with_model("qwen2.5-coder")
            .with_endpoint("http://127.0.0.1:8080/v1")
            .with_temperature(0.0)
            .with_timeout(Duration::from_secs(5))
            .with_api_key("secret");

        assert_eq!(config.model, "qwen2.5-coder");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_api_key_from_env() {
        let var = "CODE_SUMMARIZER_TEST_KEY_PRESENT";
        std::env::set_var(var, "  abc123 ");
        let config = ProviderConfig::for_provider("groq")
            .unwrap()
            .with_api_key_env(var)
            .load_api_key_from_env();
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        std::env::remove_var(var);
    }

    #[test]
    fn test_missing_api_key_stays_none() {
        let config = ProviderConfig::for_provider("groq")
            .unwrap()
            .with_api_key_env("CODE_SUMMARIZER_TEST_KEY_ABSENT")
            .load_api_key_from_env();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_explicit_key_wins_over_env() {
        let var = "CODE_SUMMARIZER_TEST_KEY_OVERRIDE";
        std::env::set_var(var, "from-env");
        let config = ProviderConfig::for_provider("groq")
            .unwrap()
            .with_api_key_env(var)
            .with_api_key("explicit")
            .load_api_key_from_env();
        assert_eq!(config.api_key.as_deref(), Some("explicit"));
        std::env::remove_var(var);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let base = ProviderConfig::for_provider("groq").unwrap();
        assert!(base.clone().with_endpoint("ftp://x").validate().is_err());
        assert!(base.clone().with_model(" ").validate().is_err());
        assert!(base.clone().with_temperature(3.5).validate().is_err());
        assert!(base.with_timeout(Duration::ZERO).validate().is_err());
    }
}
