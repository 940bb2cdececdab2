pub mod errors;
pub mod idna;
pub mod logging;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use idna::IdnaConfig;
pub use logging::LoggingConfig;
pub use resolver::{ResolverBackend, ResolverConfig};
pub use root::{CliOverrides, Config};
