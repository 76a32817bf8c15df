use serde::Deserialize;

use crate::utils::constants::{DEFAULT_API_HOST, ENV_LOG_FORMAT, ENV_LOG_LEVEL, USER_AGENT};

/// ================================
/// Client settings
/// ================================
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    /// `<secret>.<keyId>`
    pub api_key: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// applied by the transport only; the client adds no deadlines
    pub connect_timeout_ms: Option<u64>,
    pub timeout_ms: Option<u64>,
    pub logging: Option<LoggingConfig>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: default_host(),
            user_agent: default_user_agent(),
            connect_timeout_ms: None,
            timeout_ms: None,
            logging: None,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new("info".to_owned(), LogFormat::Compact)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

impl LoggingConfig {
    /// `SENDLIX_LOG_LEVEL` and `SENDLIX_LOG_FORMAT`, falling back to the defaults.
    pub fn from_env() -> Self {
        let level = std::env::var(ENV_LOG_LEVEL)
            .ok()
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| "info".to_owned());
        Self::new(level, LogFormat::from_env())
    }
}

impl LogFormat {
    /// Unset or unrecognized values select compact output.
    pub fn from_env() -> Self {
        match std::env::var(ENV_LOG_FORMAT).map(|v| v.to_lowercase()).as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

fn default_host() -> String {
    DEFAULT_API_HOST.to_owned()
}

fn default_user_agent() -> String {
    USER_AGENT.to_owned()
}
