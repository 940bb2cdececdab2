use ferrous_inet_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use std::net::IpAddr;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub addresses: Vec<IpAddr>,

    /// PTR targets, trailing root dot removed.
    pub names: Vec<String>,
}

impl DnsResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    pub fn is_server_error(&self) -> bool {
        !matches!(self.rcode, ResponseCode::NoError | ResponseCode::NXDomain)
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::NotFound(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let mut addresses = Vec::new();
        let mut names = Vec::new();

        for record in message.answers() {
            match record.data() {
                RData::A(a) => addresses.push(IpAddr::V4(a.0)),
                RData::AAAA(aaaa) => addresses.push(IpAddr::V6(aaaa.0)),
                RData::PTR(ptr) => {
                    let name = ptr.to_utf8();
                    names.push(name.trim_end_matches('.').to_string());
                }
                _ => {}
            }
        }

        debug!(
            rcode = ?rcode,
            addresses = addresses.len(),
            names = names.len(),
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode,
            addresses,
            names,
        })
    }
}
