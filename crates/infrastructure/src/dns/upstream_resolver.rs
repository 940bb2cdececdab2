//! Blocking DNS-over-UDP resolver (RFC 1035 §4.2.1)
//!
//! One query per record type, one attempt, no retry over TCP. A response with
//! the TC bit set is used as far as it goes.

use super::message_builder::MessageBuilder;
use super::response_parser::{DnsResponse, ResponseParser};
use ferrous_inet_application::ports::HostResolver;
use ferrous_inet_domain::{Address, DomainError};
use hickory_proto::rr::RecordType;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};
use std::time::Duration;
use tracing::debug;

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct UpstreamResolver {
    server_addr: SocketAddr,
    timeout: Duration,
}

impl UpstreamResolver {
    pub fn new(server_addr: SocketAddr, timeout: Duration) -> Self {
        Self {
            server_addr,
            timeout,
        }
    }

    fn exchange(&self, domain: &str, record_type: RecordType) -> Result<DnsResponse, DomainError> {
        let (id, query) = MessageBuilder::build_query_with_id(domain, record_type)?;

        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let transport_error =
            |e: std::io::Error| DomainError::NotFound(format!("{}: {}", self.server_addr, e));

        let socket = UdpSocket::bind(bind_addr).map_err(transport_error)?;
        socket
            .set_read_timeout(Some(self.timeout))
            .map_err(transport_error)?;
        socket
            .set_write_timeout(Some(self.timeout))
            .map_err(transport_error)?;
        socket.connect(self.server_addr).map_err(transport_error)?;

        let bytes_sent = socket.send(&query).map_err(transport_error)?;
        debug!(
            server = %self.server_addr,
            domain = %domain,
            record_type = ?record_type,
            bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let bytes_received = socket.recv(&mut recv_buf).map_err(transport_error)?;

        let response = ResponseParser::parse(&recv_buf[..bytes_received])?;
        if response.id != id {
            return Err(DomainError::NotFound(format!(
                "{}: response ID {} does not match query ID {}",
                self.server_addr, response.id, id
            )));
        }

        Ok(response)
    }
}

impl HostResolver for UpstreamResolver {
    fn resolve_host(&self, host: &str) -> Result<Vec<IpAddr>, DomainError> {
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(vec![ip]);
        }

        let mut addresses = Vec::new();
        let mut last_error = None;

        for record_type in [RecordType::AAAA, RecordType::A] {
            match self.exchange(host, record_type) {
                Ok(response) if response.is_server_error() => {
                    last_error = Some(DomainError::NotFound(format!(
                        "{}: {:?} for {:?} {}",
                        self.server_addr, response.rcode, record_type, host
                    )));
                }
                Ok(response) => addresses.extend(response.addresses),
                Err(e) => last_error = Some(e),
            }
        }

        match (addresses.is_empty(), last_error) {
            (true, Some(e)) => Err(e),
            _ => Ok(addresses),
        }
    }

    fn resolve_hostname(&self, ip: IpAddr) -> Result<Option<String>, DomainError> {
        let reverse_domain = Address::from(ip).reverse_domain();

        debug!(
            ip = %ip,
            reverse_domain = %reverse_domain,
            "Performing PTR lookup"
        );

        let response = self.exchange(&reverse_domain, RecordType::PTR)?;
        if response.is_nxdomain() {
            return Ok(None);
        }
        if response.is_server_error() {
            return Err(DomainError::NotFound(format!(
                "{}: {:?} for PTR {}",
                self.server_addr, response.rcode, reverse_domain
            )));
        }

        Ok(response.names.into_iter().next())
    }
}
