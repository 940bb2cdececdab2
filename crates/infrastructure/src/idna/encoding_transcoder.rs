use encoding_rs::{Encoding, UTF_8};
use ferrous_inet_application::ports::CharsetTranscoder;
use ferrous_inet_domain::DomainError;
use tracing::debug;

/// Charset conversion through `encoding_rs`. Charset names are resolved
/// with the WHATWG label table, so `ISO-8859-1` maps to windows-1252.
#[derive(Debug, Default, Clone, Copy)]
pub struct EncodingTranscoder;

impl EncodingTranscoder {
    pub fn new() -> Self {
        Self
    }

    pub fn lookup(charset: &str) -> Result<&'static Encoding, DomainError> {
        Encoding::for_label(charset.trim().as_bytes())
            .ok_or_else(|| DomainError::TranscodeError(format!("Unknown charset: {}", charset)))
    }
}

impl CharsetTranscoder for EncodingTranscoder {
    fn transcode(&self, input: &[u8], from: &str, to: &str) -> Result<Vec<u8>, DomainError> {
        let source = Self::lookup(from)?;
        let target = Self::lookup(to)?;

        let text = source
            .decode_without_bom_handling_and_without_replacement(input)
            .ok_or_else(|| {
                DomainError::TranscodeError(format!("Input is not valid {}", source.name()))
            })?;

        if target == UTF_8 {
            return Ok(text.into_owned().into_bytes());
        }

        let (bytes, used, had_errors) = target.encode(&text);
        if used != target {
            return Err(DomainError::TranscodeError(format!(
                "{} cannot be used as an output charset",
                target.name()
            )));
        }
        if had_errors {
            return Err(DomainError::TranscodeError(format!(
                "Text is not representable in {}",
                target.name()
            )));
        }

        debug!(from = source.name(), to = target.name(), len = bytes.len(), "Transcoded");
        Ok(bytes.into_owned())
    }
}
