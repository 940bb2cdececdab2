use crate::ports::HostResolver;
use ferrous_inet_domain::{Address, DomainError, HostName, PresentationString};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// Forward lookup: host name to a single address, IPv6 preferred.
pub struct LookupAddressUseCase {
    resolver: Arc<dyn HostResolver>,
}

impl LookupAddressUseCase {
    pub fn new(resolver: Arc<dyn HostResolver>) -> Self {
        Self { resolver }
    }

    pub fn execute(&self, host: &[u8]) -> Result<Address, DomainError> {
        let host = HostName::from_input(host)?;
        let name = host
            .as_str()
            .ok_or_else(|| DomainError::NotFound(host.to_string()))?;

        let candidates = match self.resolver.resolve_host(name) {
            Ok(candidates) => candidates,
            Err(e) => {
                debug!(host = %name, error = %e, "Forward lookup failed");
                return Err(DomainError::NotFound(name.to_string()));
            }
        };

        match Self::pick(&candidates) {
            Some(ip) => {
                debug!(
                    host = %name,
                    ip = %ip,
                    candidates = candidates.len(),
                    "Forward lookup resolved"
                );
                Ok(Address::from(ip))
            }
            None => {
                debug!(host = %name, "Forward lookup returned no addresses");
                Err(DomainError::NotFound(name.to_string()))
            }
        }
    }

    /// Same as [`execute`](Self::execute), rendered as presentation text.
    pub fn execute_presentation(&self, host: &[u8]) -> Result<PresentationString, DomainError> {
        self.execute(host).map(|address| address.to_presentation())
    }

    /// First IPv6 candidate if there is one, otherwise the first IPv4.
    fn pick(candidates: &[IpAddr]) -> Option<IpAddr> {
        candidates
            .iter()
            .find(|ip| ip.is_ipv6())
            .or_else(|| candidates.iter().find(|ip| ip.is_ipv4()))
            .copied()
    }
}
