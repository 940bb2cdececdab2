use super::bound_text;
use crate::ports::{AsciiLabelCodec, CharsetTranscoder};
use ferrous_inet_domain::{is_utf8_charset, DomainError, DomainLabel, DEFAULT_CHARSET};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::debug;

/// Label in the caller's charset to its ASCII-compatible form.
pub struct EncodeLabelUseCase {
    codec: Arc<dyn AsciiLabelCodec>,
    transcoder: Arc<dyn CharsetTranscoder>,
    default_charset: Arc<str>,
}

impl EncodeLabelUseCase {
    pub fn new(
        codec: Arc<dyn AsciiLabelCodec>,
        transcoder: Arc<dyn CharsetTranscoder>,
        default_charset: &str,
    ) -> Self {
        Self {
            codec,
            transcoder,
            default_charset: Arc::from(default_charset),
        }
    }

    pub fn execute(&self, label: &DomainLabel) -> Result<String, DomainError> {
        let source = label.charset().unwrap_or(&*self.default_charset);

        let unicode: Cow<'_, str> = if is_utf8_charset(source) {
            let text = std::str::from_utf8(label.bytes()).map_err(|e| {
                DomainError::TranscodeError(format!("Label is not valid {}: {}", source, e))
            })?;
            Cow::Borrowed(text)
        } else {
            let bytes = self
                .transcoder
                .transcode(label.bytes(), source, DEFAULT_CHARSET)?;
            let text = String::from_utf8(bytes).map_err(|e| {
                DomainError::TranscodeError(format!("Transcoder produced invalid UTF-8: {}", e))
            })?;
            Cow::Owned(text)
        };

        let ascii = self.codec.to_ascii(&unicode)?;

        debug!(label = %unicode, ascii = %ascii, charset = %source, "Label encoded");

        Ok(bound_text(&ascii).to_string())
    }
}
