pub mod message_builder;
pub mod response_parser;
pub mod upstream_resolver;

pub use message_builder::MessageBuilder;
pub use response_parser::{DnsResponse, ResponseParser};
pub use upstream_resolver::UpstreamResolver;
