//! Ferrous Inet Domain Layer
pub mod address;
pub mod address_family;
pub mod bounded_text;
pub mod config;
pub mod domain_label;
pub mod errors;
pub mod mask;

pub use address::Address;
pub use address_family::{AddressFamily, INET6_ADDRLEN, INET_ADDRLEN};
pub use bounded_text::{
    BoundedText, HostName, PresentationString, INET6_ADDRSTRLEN, MAX_HOSTNAME_LEN,
};
pub use config::{CliOverrides, Config};
pub use domain_label::{is_utf8_charset, DomainLabel, DEFAULT_CHARSET};
pub use errors::{DomainError, ErrorKind};
pub use mask::{apply_mask, MaskSpec};
