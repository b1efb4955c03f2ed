//! LLM endpoint configuration.

use std::time::Duration;

/// Default chat-completions endpoint.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default model name.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Where and how to reach the LLM.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    /// Full chat-completions URL.
    pub api_url: String,
    /// Bearer token. Calls fail fast without one.
    pub api_key: Option<String>,
    /// Model name sent with each request.
    pub model: String,
    /// Per-call timeout.
    pub timeout: Duration,
    /// Sampling temperature.
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl LlmConfig {
    /// Read `LLM_API_URL`, `LLM_API_KEY`, `LLM_MODEL`, `LLM_TIMEOUT_SECS` and
    /// `LLM_TEMPERATURE`, keeping defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparsable numbers keep their
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(url) = get("LLM_API_URL") {
            config.api_url = url;
        }
        config.api_key = get("LLM_API_KEY");
        if let Some(model) = get("LLM_MODEL") {
            config.model = model;
        }
        if let Some(raw) = get("LLM_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) => config.timeout = Duration::from_secs(secs),
                Err(_) => tracing::warn!(value = %raw, "ignoring invalid LLM_TIMEOUT_SECS"),
            }
        }
        if let Some(raw) = get("LLM_TEMPERATURE") {
            match raw.parse::<f32>() {
                Ok(t) => config.temperature = t.clamp(0.0, 2.0),
                Err(_) => tracing::warn!(value = %raw, "ignoring invalid LLM_TEMPERATURE"),
            }
        }
        config
    }

    /// Set the endpoint URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the temperature, clamped to 0.0-2.0.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature.clamp(0.0, 2.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = LlmConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.temperature, 0.5);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn lookup_overrides() {
        let config = LlmConfig::from_lookup(lookup(&[
            ("LLM_API_URL", "http://localhost:9000/v1/chat/completions"),
            ("LLM_API_KEY", "sk-test"),
            ("LLM_MODEL", "local"),
            ("LLM_TIMEOUT_SECS", "5"),
            ("LLM_TEMPERATURE", "0.2"),
        ]));
        assert_eq!(config.api_url, "http://localhost:9000/v1/chat/completions");
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.model, "local");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.temperature, 0.2);
    }

    #[test]
    fn blank_and_invalid_values_keep_defaults() {
        let config = LlmConfig::from_lookup(lookup(&[
            ("LLM_API_KEY", "   "),
            ("LLM_TIMEOUT_SECS", "soon"),
            ("LLM_TEMPERATURE", "hot"),
        ]));
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn builder() {
        let config = LlmConfig::default()
            .with_api_key("k")
            .with_model("m")
            .with_temperature(9.0)
            .with_timeout(Duration::from_millis(10));
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.model, "m");
        assert_eq!(config.temperature, 2.0);
        assert_eq!(config.timeout, Duration::from_millis(10));
    }
}
