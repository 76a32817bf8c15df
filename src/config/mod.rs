pub mod loader;
pub mod settings;

pub use settings::{ClientConfig, LogFormat, LoggingConfig};
