// src/config.rs
use std::time::Duration;

use crate::errors::{Result, SolveError};

/// Configuration for the Gemini solver backend.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
}

/// High-level application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini: GeminiConfig,
    pub solve_timeout: Duration,
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// The API key is validated here so a missing key aborts startup instead
    /// of surfacing as a failed remote call on the first submission.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                SolveError::Config(
                    "GEMINI_API_KEY is not set. The solver cannot reach the model without it."
                        .to_string(),
                )
            })?;

        let api_base = lookup("GEMINI_API_BASE")
            .unwrap_or_else(|| "https://generativelanguage.googleapis.com".to_string());
        let model = lookup("GEMINI_MODEL").unwrap_or_else(|| "gemini-3-flash-preview".to_string());

        let temperature = parse_or_default(lookup("GEMINI_TEMPERATURE"), "GEMINI_TEMPERATURE", 0.2)?;
        let timeout_secs: u64 =
            parse_or_default(lookup("SOLVE_TIMEOUT_SECS"), "SOLVE_TIMEOUT_SECS", 90)?;
        let port: u16 = parse_or_default(lookup("PORT"), "PORT", 8080)?;

        Ok(AppConfig {
            gemini: GeminiConfig {
                api_base,
                api_key,
                model,
                temperature,
            },
            solve_timeout: Duration::from_secs(timeout_secs),
            port,
        })
    }
}

fn parse_or_default<T: std::str::FromStr>(
    value: Option<String>,
    name: &str,
    default: T,
) -> Result<T> {
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| SolveError::Config(format!("{} has an invalid value: {}", name, raw))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn missing_api_key_fails_at_startup() {
        let result = AppConfig::from_lookup(env(&[]));
        assert!(matches!(result, Err(SolveError::Config(_))));
    }

    #[test]
    fn blank_api_key_fails_at_startup() {
        let result = AppConfig::from_lookup(env(&[("GEMINI_API_KEY", "   ")]));
        assert!(matches!(result, Err(SolveError::Config(_))));
    }

    #[test]
    fn defaults_apply_when_only_the_key_is_set() {
        let config = AppConfig::from_lookup(env(&[("GEMINI_API_KEY", "test-key")])).unwrap();

        assert_eq!(config.gemini.api_key, "test-key");
        assert_eq!(
            config.gemini.api_base,
            "https://generativelanguage.googleapis.com"
        );
        assert_eq!(config.gemini.model, "gemini-3-flash-preview");
        assert_eq!(config.gemini.temperature, 0.2);
        assert_eq!(config.solve_timeout, Duration::from_secs(90));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn overrides_are_honored() {
        let config = AppConfig::from_lookup(env(&[
            ("GEMINI_API_KEY", "test-key"),
            ("GEMINI_MODEL", "gemini-2.5-pro"),
            ("GEMINI_TEMPERATURE", "0.7"),
            ("SOLVE_TIMEOUT_SECS", "30"),
            ("PORT", "9090"),
        ]))
        .unwrap();

        assert_eq!(config.gemini.model, "gemini-2.5-pro");
        assert_eq!(config.gemini.temperature, 0.7);
        assert_eq!(config.solve_timeout, Duration::from_secs(30));
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn garbage_numeric_values_are_rejected() {
        let result = AppConfig::from_lookup(env(&[
            ("GEMINI_API_KEY", "test-key"),
            ("SOLVE_TIMEOUT_SECS", "soon"),
        ]));
        assert!(matches!(result, Err(SolveError::Config(_))));
    }
}
