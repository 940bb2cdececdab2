use thiserror::Error;

/// Problems loading or checking `ferrous-inet.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {reason}")]
    FileRead { path: String, reason: String },

    #[error("Invalid TOML in config: {0}")]
    Parse(String),

    #[error("Invalid config value: {0}")]
    Validation(String),
}
