use ferrous_inet_application::ports::HostResolver;
use ferrous_inet_domain::DomainError;
use std::ffi::CStr;
use std::net::{IpAddr, ToSocketAddrs};
use tracing::debug;

/// Host buffer size for getnameinfo (glibc `NI_MAXHOST`).
const NI_MAXHOST: usize = 1025;

/// Platform resolver: getaddrinfo for forward lookups, getnameinfo for
/// reverse lookups. Both calls block the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }

    fn name_info(ip: IpAddr) -> Result<Option<String>, DomainError> {
        let mut host = [0 as libc::c_char; NI_MAXHOST];

        let rc = match ip {
            IpAddr::V4(v4) => {
                let mut sa: libc::sockaddr_in = unsafe { std::mem::zeroed() };
                sa.sin_family = libc::AF_INET as libc::sa_family_t;
                sa.sin_addr = libc::in_addr {
                    s_addr: u32::from_ne_bytes(v4.octets()),
                };
                unsafe {
                    libc::getnameinfo(
                        &sa as *const libc::sockaddr_in as *const libc::sockaddr,
                        std::mem::size_of::<libc::sockaddr_in>() as libc::socklen_t,
                        host.as_mut_ptr(),
                        host.len() as _,
                        std::ptr::null_mut(),
                        0,
                        libc::NI_NAMEREQD,
                    )
                }
            }
            IpAddr::V6(v6) => {
                let mut sa: libc::sockaddr_in6 = unsafe { std::mem::zeroed() };
                sa.sin6_family = libc::AF_INET6 as libc::sa_family_t;
                sa.sin6_addr = libc::in6_addr {
                    s6_addr: v6.octets(),
                };
                unsafe {
                    libc::getnameinfo(
                        &sa as *const libc::sockaddr_in6 as *const libc::sockaddr,
                        std::mem::size_of::<libc::sockaddr_in6>() as libc::socklen_t,
                        host.as_mut_ptr(),
                        host.len() as _,
                        std::ptr::null_mut(),
                        0,
                        libc::NI_NAMEREQD,
                    )
                }
            }
        };

        match rc {
            0 => {
                let name = unsafe { CStr::from_ptr(host.as_ptr()) };
                Ok(Some(name.to_string_lossy().into_owned()))
            }
            libc::EAI_NONAME => Ok(None),
            code => {
                let reason = unsafe { CStr::from_ptr(libc::gai_strerror(code)) };
                Err(DomainError::NotFound(format!(
                    "{}: {}",
                    ip,
                    reason.to_string_lossy()
                )))
            }
        }
    }
}

impl HostResolver for SystemResolver {
    fn resolve_host(&self, host: &str) -> Result<Vec<IpAddr>, DomainError> {
        let addresses: Vec<IpAddr> = (host, 0u16)
            .to_socket_addrs()
            .map_err(|e| DomainError::NotFound(format!("{}: {}", host, e)))?
            .map(|addr| addr.ip())
            .collect();

        debug!(host = %host, count = addresses.len(), "getaddrinfo returned");
        Ok(addresses)
    }

    fn resolve_hostname(&self, ip: IpAddr) -> Result<Option<String>, DomainError> {
        let result = Self::name_info(ip);
        debug!(ip = %ip, result = ?result, "getnameinfo returned");
        result
    }
}
