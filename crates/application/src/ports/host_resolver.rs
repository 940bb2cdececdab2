use ferrous_inet_domain::DomainError;
use std::net::IpAddr;

/// Blocking name resolution. Implementations make a single attempt per call
/// and never cache; deadlines are imposed by the caller.
pub trait HostResolver: Send + Sync {
    /// Every address known for `host`, in the order the resolver returned them.
    fn resolve_host(&self, host: &str) -> Result<Vec<IpAddr>, DomainError>;

    /// Canonical name for `ip`. `Ok(None)` when no mapping exists.
    fn resolve_hostname(&self, ip: IpAddr) -> Result<Option<String>, DomainError>;
}
