//! Configuration types.

use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Default completion model for advisory requests.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default model for the open-ended quiz and its analysis, which benefit
/// from a stronger reasoning model.
pub const DEFAULT_REASONING_MODEL: &str = "gemini-2.5-pro";

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Application configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API key for the completion provider. Never logged.
    pub api_key: SecretString,
    /// Model used for most advisory requests.
    pub model: String,
    /// Model used for open-ended quiz generation and analysis.
    pub reasoning_model: String,
    /// Timeout applied to each outbound completion request.
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = get("GEMINI_API_KEY").ok_or_else(|| ConfigError::MissingEnvVar {
            key: "GEMINI_API_KEY".to_string(),
            hint: "export GEMINI_API_KEY=<your key>".to_string(),
        })?;

        let model = get("CAREER_COMPASS_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let reasoning_model = get("CAREER_COMPASS_REASONING_MODEL")
            .unwrap_or_else(|| DEFAULT_REASONING_MODEL.to_string());

        let timeout_secs = match get("CAREER_COMPASS_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                key: "CAREER_COMPASS_TIMEOUT_SECS".to_string(),
                message: e.to_string(),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key: SecretString::from(api_key),
            model,
            reasoning_model,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn defaults_applied() {
        let config = AppConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "test-key")])).unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.reasoning_model, DEFAULT_REASONING_MODEL);
        assert_eq!(config.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let err = AppConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar { ref key, .. } if key == "GEMINI_API_KEY"));
    }

    #[test]
    fn overrides_respected() {
        let config = AppConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "test-key"),
            ("CAREER_COMPASS_MODEL", "gemini-x"),
            ("CAREER_COMPASS_REASONING_MODEL", "gemini-y"),
            ("CAREER_COMPASS_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.model, "gemini-x");
        assert_eq!(config.reasoning_model, "gemini-y");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn bad_timeout_is_an_error() {
        let err = AppConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "test-key"),
            ("CAREER_COMPASS_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. }
            if key == "CAREER_COMPASS_TIMEOUT_SECS"));
    }
}
