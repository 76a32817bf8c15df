use anyhow::Result;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::settings::{ClientConfig, LogFormat, LoggingConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match *self {
            LogLevel::TRACE => "TRACE",
            LogLevel::DEBUG => "DEBUG",
            LogLevel::INFO => "INFO",
            LogLevel::WARN => "WARN",
            LogLevel::ERROR => "ERROR",
        }
    }
}

/// Install logging from a client config; an explicit level wins over the
/// configured one.
pub fn run(config: &ClientConfig, level_override: Option<LogLevel>) -> Result<()> {
    let mut logging_config = config.logging.clone().unwrap_or_default();
    if let Some(level) = level_override {
        logging_config.level = level.as_str().to_owned();
    }
    init_logging(&logging_config);
    Ok(())
}

/// Install a global subscriber for the SDK's spans and events. Only the
/// first call in a process takes effect; an application that already set a
/// subscriber keeps it.
pub fn init_logging(cfg: &LoggingConfig) {
    let filter = EnvFilter::try_new(&cfg.level).unwrap_or_else(|_| EnvFilter::new("info"));

    // exactly one of the two layers is Some
    let (json, compact) = match cfg.format {
        LogFormat::Json => (
            Some(fmt::layer().json().flatten_event(true).with_ansi(false).with_timer(UtcTime::rfc_3339())),
            None,
        ),
        LogFormat::Compact => (
            None,
            Some(fmt::layer().compact().with_target(false).with_timer(UtcTime::rfc_3339())),
        ),
    };

    if tracing_subscriber::registry().with(filter).with(json).with(compact).try_init().is_err() {
        tracing::debug!("a global subscriber is already installed");
    }
}
