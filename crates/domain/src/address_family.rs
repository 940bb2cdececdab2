use crate::DomainError;
use std::fmt;
use std::str::FromStr;

pub const INET_ADDRLEN: usize = 4;
pub const INET6_ADDRLEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    /// Classifies presentation text: a colon anywhere means IPv6, anything
    /// else is taken as IPv4. Syntax is not validated here, so the codec may
    /// still reject text that was classified.
    pub fn detect_text(text: &[u8]) -> AddressFamily {
        if text.contains(&b':') {
            AddressFamily::V6
        } else {
            AddressFamily::V4
        }
    }

    /// Classifies a binary buffer by its length alone.
    pub fn detect_binary(bytes: &[u8]) -> Result<AddressFamily, DomainError> {
        match bytes.len() {
            INET_ADDRLEN => Ok(AddressFamily::V4),
            INET6_ADDRLEN => Ok(AddressFamily::V6),
            other => Err(DomainError::UnrecognizedFamily(other)),
        }
    }

    pub const fn byte_len(&self) -> usize {
        match self {
            AddressFamily::V4 => INET_ADDRLEN,
            AddressFamily::V6 => INET6_ADDRLEN,
        }
    }

    pub const fn bit_width(&self) -> u32 {
        (self.byte_len() * 8) as u32
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressFamily::V4 => "IPv4",
            AddressFamily::V6 => "IPv6",
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "4" | "v4" | "ipv4" | "inet" => Ok(AddressFamily::V4),
            "6" | "v6" | "ipv6" | "inet6" => Ok(AddressFamily::V6),
            _ => Err(format!("Unknown address family: {}", s)),
        }
    }
}
