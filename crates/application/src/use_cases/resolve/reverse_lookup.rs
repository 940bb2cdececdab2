use crate::ports::HostResolver;
use ferrous_inet_domain::{Address, DomainError, HostName};
use std::sync::Arc;
use tracing::debug;

/// Reverse lookup: address to canonical host name.
pub struct ReverseLookupUseCase {
    resolver: Arc<dyn HostResolver>,
}

impl ReverseLookupUseCase {
    pub fn new(resolver: Arc<dyn HostResolver>) -> Self {
        Self { resolver }
    }

    pub fn execute(&self, address: &Address) -> Result<HostName, DomainError> {
        let ip = address.to_ip_addr();

        match self.resolver.resolve_hostname(ip) {
            Ok(Some(hostname)) if !hostname.is_empty() => {
                debug!(ip = %ip, hostname = %hostname, "Reverse lookup resolved");
                Ok(HostName::from(hostname.as_str()))
            }
            Ok(_) => {
                debug!(ip = %ip, "No PTR mapping found");
                Err(DomainError::NotFound(ip.to_string()))
            }
            Err(e) => {
                debug!(ip = %ip, error = %e, "Reverse lookup failed");
                Err(DomainError::NotFound(ip.to_string()))
            }
        }
    }

    /// Accepts either presentation text or an already-binary address.
    ///
    /// Input containing `:` or `.` is first parsed as presentation text. When
    /// that parse fails, or the input carries neither separator, the original
    /// bytes are taken as a 4 or 16 byte binary address.
    pub fn execute_any(&self, input: &[u8]) -> Result<HostName, DomainError> {
        let address = Self::interpret(input)?;
        self.execute(&address)
    }

    fn interpret(input: &[u8]) -> Result<Address, DomainError> {
        if input.is_empty() {
            return Err(DomainError::EmptyInput);
        }

        if Self::looks_like_presentation(input) {
            match Address::from_presentation(input) {
                Ok(address) => return Ok(address),
                Err(e) => debug!(
                    error = %e,
                    len = input.len(),
                    "Not presentation text, trying binary"
                ),
            }
        }

        Address::from_bytes(input)
    }

    fn looks_like_presentation(input: &[u8]) -> bool {
        input.iter().any(|b| *b == b':' || *b == b'.')
    }
}
