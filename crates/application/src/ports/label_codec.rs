use ferrous_inet_domain::DomainError;

/// Converts domain names between Unicode and ASCII-compatible encoding.
pub trait AsciiLabelCodec: Send + Sync {
    fn to_ascii(&self, unicode: &str) -> Result<String, DomainError>;

    fn to_unicode(&self, ascii: &str) -> Result<String, DomainError>;
}
