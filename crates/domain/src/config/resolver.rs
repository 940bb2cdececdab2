use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

const DNS_PORT: u16 = 53;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolverBackend {
    /// Platform resolver (getaddrinfo / getnameinfo).
    #[default]
    System,
    /// Plain DNS over UDP to `ResolverConfig::upstream`.
    Upstream,
}

impl fmt::Display for ResolverBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolverBackend::System => f.write_str("system"),
            ResolverBackend::Upstream => f.write_str("upstream"),
        }
    }
}

impl FromStr for ResolverBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "system" => Ok(ResolverBackend::System),
            "upstream" => Ok(ResolverBackend::Upstream),
            _ => Err(format!("Unknown resolver backend: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub backend: ResolverBackend,

    #[serde(default = "default_upstream")]
    pub upstream: String,

    /// Per-call deadline imposed around resolver calls.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Worker pool bound for batch input.
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

impl ResolverConfig {
    pub fn upstream_addr(&self) -> Result<SocketAddr, String> {
        if let Ok(addr) = self.upstream.parse::<SocketAddr>() {
            return Ok(addr);
        }

        self.upstream
            .parse::<IpAddr>()
            .map(|ip| SocketAddr::new(ip, DNS_PORT))
            .map_err(|e| format!("Invalid upstream '{}': {}", self.upstream, e))
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            backend: ResolverBackend::default(),
            upstream: default_upstream(),
            timeout_secs: default_timeout_secs(),
            max_concurrent: default_max_concurrent(),
        }
    }
}

fn default_upstream() -> String {
    "8.8.8.8:53".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_max_concurrent() -> usize {
    4
}
