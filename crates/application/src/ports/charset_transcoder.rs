use ferrous_inet_domain::DomainError;

pub trait CharsetTranscoder: Send + Sync {
    /// Re-encodes `input` from charset `from` to charset `to`. Unknown charset
    /// names and unmappable characters fail with `DomainError::TranscodeError`.
    fn transcode(&self, input: &[u8], from: &str, to: &str) -> Result<Vec<u8>, DomainError>;
}
