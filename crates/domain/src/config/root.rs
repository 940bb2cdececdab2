use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::idna::IdnaConfig;
use super::logging::LoggingConfig;
use super::resolver::{ResolverBackend, ResolverConfig};

const LOCAL_CONFIG_PATH: &str = "ferrous-inet.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-inet/config.toml";

/// Main configuration structure for Ferrous Inet
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Name resolution (backend, upstream server, deadlines)
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Internationalised label handling
    #[serde(default)]
    pub idna: IdnaConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-inet.toml in current directory
    /// 3. /etc/ferrous-inet/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(backend) = overrides.backend {
            self.resolver.backend = backend;
        }
        if let Some(upstream) = overrides.upstream {
            self.resolver.upstream = upstream;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.resolver.timeout_secs = timeout;
        }
        if let Some(charset) = overrides.default_charset {
            self.idna.default_charset = charset;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Resolver timeout cannot be 0".to_string(),
            ));
        }

        if self.resolver.max_concurrent == 0 {
            return Err(ConfigError::Validation(
                "Resolver max_concurrent cannot be 0".to_string(),
            ));
        }

        if self.resolver.backend == ResolverBackend::Upstream {
            self.resolver
                .upstream_addr()
                .map_err(ConfigError::Validation)?;
        }

        if self.idna.default_charset.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Default charset cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub backend: Option<ResolverBackend>,
    pub upstream: Option<String>,
    pub timeout_secs: Option<u64>,
    pub default_charset: Option<String>,
    pub log_level: Option<String>,
}
