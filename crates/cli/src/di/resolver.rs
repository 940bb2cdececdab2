use ferrous_inet_application::ports::HostResolver;
use ferrous_inet_domain::config::ResolverBackend;
use ferrous_inet_domain::{Config, DomainError};
use ferrous_inet_infrastructure::dns::UpstreamResolver;
use ferrous_inet_infrastructure::system::SystemResolver;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub fn build_resolver(config: &Config) -> Result<Arc<dyn HostResolver>, DomainError> {
    match config.resolver.backend {
        ResolverBackend::System => {
            info!("Using system resolver");
            Ok(Arc::new(SystemResolver::new()))
        }
        ResolverBackend::Upstream => {
            let server_addr = config
                .resolver
                .upstream_addr()
                .map_err(DomainError::Config)?;
            let timeout = Duration::from_secs(config.resolver.timeout_secs);

            info!(
                server = %server_addr,
                timeout_secs = config.resolver.timeout_secs,
                "Using upstream resolver"
            );
            Ok(Arc::new(UpstreamResolver::new(server_addr, timeout)))
        }
    }
}
