use reqwest::Url;
use std::env;
use std::time::Duration;
use thiserror::Error;

pub const TOKEN_VAR: &str = "DISCORD_TOKEN";
pub const CLIENT_ID_VAR: &str = "CLIENT_ID";
pub const ANSWER_SERVICE_URL_VAR: &str = "ANSWER_SERVICE_URL";
pub const ANSWER_TIMEOUT_VAR: &str = "ANSWER_TIMEOUT_SECS";

const DEFAULT_ANSWER_SERVICE_URL: &str = "http://localhost:5000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} wasn't in env vars")]
    Missing(&'static str),
    #[error("{key} has an invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Process configuration, read once at startup and handed to the bot runtime and the
/// command registrar.
#[derive(Clone)]
pub struct Config {
    token: String,
    application_id: u64,
    answer_service_url: Url,
    answer_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_VAR)
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::Missing(TOKEN_VAR))?;

        let raw_id = lookup(CLIENT_ID_VAR).ok_or(ConfigError::Missing(CLIENT_ID_VAR))?;
        let application_id = match raw_id.trim().parse::<u64>() {
            Ok(0) | Err(_) => {
                return Err(ConfigError::Invalid {
                    key: CLIENT_ID_VAR,
                    value: raw_id,
                    reason: "expected a non-zero integer id",
                })
            }
            Ok(id) => id,
        };

        let raw_url = lookup(ANSWER_SERVICE_URL_VAR)
            .unwrap_or_else(|| DEFAULT_ANSWER_SERVICE_URL.to_string());
        let answer_service_url = match Url::parse(raw_url.trim()) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => url,
            _ => {
                return Err(ConfigError::Invalid {
                    key: ANSWER_SERVICE_URL_VAR,
                    value: raw_url,
                    reason: "expected an http(s) url",
                })
            }
        };

        let answer_timeout = match lookup(ANSWER_TIMEOUT_VAR) {
            None => None,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(ConfigError::Invalid {
                        key: ANSWER_TIMEOUT_VAR,
                        value: raw,
                        reason: "expected a positive number of seconds",
                    })
                }
            },
        };

        Ok(Self {
            token,
            application_id,
            answer_service_url,
            answer_timeout,
        })
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[must_use]
    pub fn application_id(&self) -> u64 {
        self.application_id
    }

    #[must_use]
    pub fn answer_service_url(&self) -> &Url {
        &self.answer_service_url
    }

    #[must_use]
    pub fn answer_timeout(&self) -> Option<Duration> {
        self.answer_timeout
    }
}

// Keeps the token out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("application_id", &self.application_id)
            .field("answer_service_url", &self.answer_service_url.as_str())
            .field("answer_timeout", &self.answer_timeout)
            .finish()
    }
}
