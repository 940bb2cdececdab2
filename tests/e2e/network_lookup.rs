//! Run with `cargo test -p ferrous-inet-e2e -- --ignored`.

use ferrous_inet_application::ports::HostResolver;
use ferrous_inet_application::use_cases::{LookupAddressUseCase, ReverseLookupUseCase};
use ferrous_inet_domain::{Address, AddressFamily, ErrorKind};
use ferrous_inet_infrastructure::dns::UpstreamResolver;
use ferrous_inet_infrastructure::system::SystemResolver;
use std::sync::Arc;
use std::time::Duration;

fn system() -> Arc<dyn HostResolver> {
    Arc::new(SystemResolver::new())
}

fn upstream() -> Arc<dyn HostResolver> {
    let server = "8.8.8.8:53".parse().unwrap();
    Arc::new(UpstreamResolver::new(server, Duration::from_secs(5)))
}

#[test]
#[ignore]
fn reverse_lookup_returns_name_or_not_found() {
    for resolver in [system(), upstream()] {
        let reverse = ReverseLookupUseCase::new(resolver);
        let address = Address::parse("2001:4860:a005::68", AddressFamily::V6).unwrap();

        match reverse.execute(&address) {
            Ok(name) => assert!(!name.is_empty()),
            Err(e) => assert_eq!(e.kind(), ErrorKind::NotFound),
        }
    }
}

#[test]
#[ignore]
fn reverse_lookup_text_and_binary_agree() {
    for resolver in [system(), upstream()] {
        let reverse = ReverseLookupUseCase::new(resolver);
        let binary = Address::from_presentation(b"64.128.190.61").unwrap();

        let from_text = reverse.execute_any(b"64.128.190.61");
        let from_binary = reverse.execute_any(binary.octets());

        assert_eq!(from_text.is_ok(), from_binary.is_ok());
        if let (Err(a), Err(b)) = (&from_text, &from_binary) {
            assert_eq!(a.kind(), b.kind());
        }
    }
}

#[test]
#[ignore]
fn forward_lookup_of_public_name() {
    for resolver in [system(), upstream()] {
        let lookup = LookupAddressUseCase::new(resolver);

        let address = lookup.execute(b"dns.google").unwrap();
        assert!(!address.to_ip_addr().is_unspecified());
    }
}

#[test]
#[ignore]
fn forward_lookup_of_reserved_name_is_not_found() {
    for resolver in [system(), upstream()] {
        let lookup = LookupAddressUseCase::new(resolver);

        let err = lookup.execute(b"does-not-exist.invalid").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
