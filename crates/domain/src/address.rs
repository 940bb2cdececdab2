use crate::address_family::{AddressFamily, INET6_ADDRLEN, INET_ADDRLEN};
use crate::bounded_text::PresentationString;
use crate::DomainError;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Fixed-width binary network address. The variant fixes the byte length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    V4([u8; INET_ADDRLEN]),
    V6([u8; INET6_ADDRLEN]),
}

impl Address {
    /// Builds an address from a 4 or 16 byte buffer.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DomainError> {
        match AddressFamily::detect_binary(bytes)? {
            AddressFamily::V4 => {
                let mut octets = [0u8; INET_ADDRLEN];
                octets.copy_from_slice(bytes);
                Ok(Address::V4(octets))
            }
            AddressFamily::V6 => {
                let mut octets = [0u8; INET6_ADDRLEN];
                octets.copy_from_slice(bytes);
                Ok(Address::V6(octets))
            }
        }
    }

    /// Parses `text` under the grammar of `family`.
    pub fn parse(text: &str, family: AddressFamily) -> Result<Self, DomainError> {
        let parsed = match family {
            AddressFamily::V4 => text.parse::<Ipv4Addr>().map(|ip| Address::V4(ip.octets())),
            AddressFamily::V6 => text.parse::<Ipv6Addr>().map(|ip| Address::V6(ip.octets())),
        };

        parsed.map_err(|_| DomainError::ParseError {
            family: family.as_str(),
            input: text.to_string(),
        })
    }

    /// Parses a caller-supplied presentation buffer.
    ///
    /// The buffer is cut to [`PresentationString::CAPACITY`] bytes first, then
    /// classified with [`AddressFamily::detect_text`] and parsed.
    pub fn from_presentation(input: &[u8]) -> Result<Self, DomainError> {
        Self::from_presentation_as(input, None)
    }

    /// Like [`from_presentation`](Self::from_presentation), but a given
    /// `family` replaces detection and the text must match its grammar.
    pub fn from_presentation_as(
        input: &[u8],
        family: Option<AddressFamily>,
    ) -> Result<Self, DomainError> {
        let text = PresentationString::from_input(input)?;
        let family = family.unwrap_or_else(|| AddressFamily::detect_text(text.as_bytes()));

        match text.as_str() {
            Some(s) => Self::parse(s, family),
            None => Err(DomainError::ParseError {
                family: family.as_str(),
                input: text.to_string(),
            }),
        }
    }

    pub fn family(&self) -> AddressFamily {
        match self {
            Address::V4(_) => AddressFamily::V4,
            Address::V6(_) => AddressFamily::V6,
        }
    }

    pub fn octets(&self) -> &[u8] {
        match self {
            Address::V4(octets) => &octets[..],
            Address::V6(octets) => &octets[..],
        }
    }

    pub fn to_ip_addr(&self) -> IpAddr {
        match self {
            Address::V4(octets) => IpAddr::V4(Ipv4Addr::from(*octets)),
            Address::V6(octets) => IpAddr::V6(Ipv6Addr::from(*octets)),
        }
    }

    /// Canonical text form: dotted-decimal for IPv4, zero-compressed
    /// lowercase hex for IPv6.
    pub fn to_presentation(&self) -> PresentationString {
        PresentationString::from(self.to_string().as_str())
    }

    /// IPv6 with all eight groups written out as four hex digits.
    /// IPv4 has no expanded form and renders dotted-decimal.
    pub fn to_expanded(&self) -> String {
        match self {
            Address::V4(_) => self.to_string(),
            Address::V6(octets) => octets
                .chunks_exact(2)
                .map(|pair| format!("{:02x}{:02x}", pair[0], pair[1]))
                .collect::<Vec<_>>()
                .join(":"),
        }
    }

    /// Name queried for PTR records of this address.
    pub fn reverse_domain(&self) -> String {
        match self {
            Address::V4(octets) => format!(
                "{}.{}.{}.{}.in-addr.arpa",
                octets[3], octets[2], octets[1], octets[0]
            ),
            Address::V6(octets) => {
                let mut nibbles = Vec::with_capacity(INET6_ADDRLEN * 2);
                for byte in octets.iter().rev() {
                    nibbles.push(format!("{:x}", byte & 0x0f));
                    nibbles.push(format!("{:x}", (byte >> 4) & 0x0f));
                }
                format!("{}.ip6.arpa", nibbles.join("."))
            }
        }
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => Address::V4(v4.octets()),
            IpAddr::V6(v6) => Address::V6(v6.octets()),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(address: Address) -> Self {
        address.to_ip_addr()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ip_addr())
    }
}
