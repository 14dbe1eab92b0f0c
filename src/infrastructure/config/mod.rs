use std::env;
use std::ops::RangeInclusive;
use std::time::Duration;

use crate::domain::roast::DEFAULT_SYSTEM_PROMPT;

pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ROAST_TEMPERATURE: f64 = 0.9;
pub const ROAST_TEMPERATURE_RANGE: RangeInclusive<f64> = 0.8..=0.95;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Spotify OAuth
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub spotify_token_url: String,
    // Gemini
    pub gemini_api_key: String,
    pub gemini_api_base_url: String,
    pub gemini_model: String,
    pub roast_temperature: f64,
    pub roast_system_prompt: String,
    // Outbound HTTP
    pub upstream_timeout: Duration,
    /// `None` allows any origin.
    pub cors_allowed_origins: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_source(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let optional = |key: &str, default: &str| -> String {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let port = parse_value("PORT", &optional("PORT", "8888"))?;

        let roast_temperature: f64 = parse_value(
            "ROAST_TEMPERATURE",
            &optional("ROAST_TEMPERATURE", &DEFAULT_ROAST_TEMPERATURE.to_string()),
        )?;
        if !ROAST_TEMPERATURE_RANGE.contains(&roast_temperature) {
            return Err(ConfigError::Invalid {
                key: "ROAST_TEMPERATURE",
                reason: format!(
                    "{} is outside {}..={}",
                    roast_temperature,
                    ROAST_TEMPERATURE_RANGE.start(),
                    ROAST_TEMPERATURE_RANGE.end()
                ),
            });
        }

        let timeout_secs: u64 = parse_value(
            "UPSTREAM_TIMEOUT_SECS",
            &optional("UPSTREAM_TIMEOUT_SECS", "15"),
        )?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "UPSTREAM_TIMEOUT_SECS",
                reason: "must be greater than zero".to_string(),
            });
        }

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty());

        let config = Config {
            host: optional("HOST", "0.0.0.0"),
            port,
            environment: match optional("ENVIRONMENT", "development").as_str() {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match optional("LOG_FORMAT", "pretty").as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            spotify_client_id: required("SPOTIFY_CLIENT_ID")?,
            spotify_client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            spotify_token_url: optional("SPOTIFY_TOKEN_URL", DEFAULT_SPOTIFY_TOKEN_URL),
            gemini_api_key: required("GEMINI_API_KEY")?,
            gemini_api_base_url: optional("GEMINI_API_BASE_URL", DEFAULT_GEMINI_API_BASE_URL),
            gemini_model: optional("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            roast_temperature,
            roast_system_prompt: optional("ROAST_SYSTEM_PROMPT", DEFAULT_SYSTEM_PROMPT),
            upstream_timeout: Duration::from_secs(timeout_secs),
            cors_allowed_origins,
        };

        Ok(config)
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}
