use std::path::Path;

use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, error};

use crate::auth::Credential;
use crate::config::settings::{ClientConfig, LoggingConfig};
use crate::utils::constants::{ENV_API_KEY, ENV_HOST};

lazy_static! {
    static ref ENV_PLACEHOLDER: Regex = Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}").unwrap();
}

/// Load a client config from a YAML file, expanding `${VAR}` and
/// `${VAR:default}` from the environment.
pub async fn load_config(path: impl AsRef<Path>) -> Result<ClientConfig> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&expand_env_vars(&content))
        .map_err(|e| anyhow!(format!("Invalid config format: {}", e)))
}

pub fn parse_config(content: &str) -> Result<ClientConfig> {
    let mut config: ClientConfig = serde_yaml::from_str(content)
        .inspect_err(|e| error!("parse config error: {}", e))?;

    // Apply defaults
    if config.logging.is_none() {
        config.logging = Some(LoggingConfig::default());
    }
    debug!("validating config ...");
    validate(&config)?;
    Ok(config)
}

/// Build a config from `SENDLIX_API_KEY` and, optionally, `SENDLIX_HOST`.
/// Logging comes from `SENDLIX_LOG_LEVEL` / `SENDLIX_LOG_FORMAT`.
pub fn from_env() -> Result<ClientConfig> {
    let api_key = std::env::var(ENV_API_KEY).with_context(|| format!("{ENV_API_KEY} is not set"))?;
    let mut config = ClientConfig::new(api_key);
    if let Ok(host) = std::env::var(ENV_HOST) {
        config = config.with_host(host);
    }
    config.logging = Some(LoggingConfig::from_env());
    validate(&config)?;
    Ok(config)
}

fn validate(config: &ClientConfig) -> Result<()> {
    Credential::parse(&config.api_key).context("api_key")?;
    if config.host.is_empty() {
        return Err(anyhow!("host must not be empty"));
    }
    Ok(())
}

fn expand_env_vars(input: &str) -> String {
    ENV_PLACEHOLDER
        .replace_all(input, |caps: &regex::Captures| {
            let var = &caps[1];
            let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            std::env::var(var).unwrap_or_else(|_| default.to_string())
        })
        .to_string()
}
