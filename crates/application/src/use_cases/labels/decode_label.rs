use super::bound_text;
use crate::ports::{AsciiLabelCodec, CharsetTranscoder};
use ferrous_inet_domain::{
    is_utf8_charset, DomainError, DomainLabel, DEFAULT_CHARSET, MAX_HOSTNAME_LEN,
};
use std::sync::Arc;
use tracing::debug;

/// ASCII-compatible label to Unicode, delivered in the requested charset.
pub struct DecodeLabelUseCase {
    codec: Arc<dyn AsciiLabelCodec>,
    transcoder: Arc<dyn CharsetTranscoder>,
    default_charset: Arc<str>,
}

impl DecodeLabelUseCase {
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

    pub fn execute(&self, label: &DomainLabel) -> Result<Vec<u8>, DomainError> {
        let ascii = label.text().as_str().ok_or_else(|| {
            DomainError::LabelCodec(format!("Label is not valid text: {}", label.text()))
        })?;

        let unicode = self.codec.to_unicode(ascii)?;
        let target = label.charset().unwrap_or(&*self.default_charset);

        debug!(label = %ascii, unicode = %unicode, charset = %target, "Label decoded");

        if is_utf8_charset(target) {
            return Ok(bound_text(&unicode).as_bytes().to_vec());
        }

        self.transcode_bounded(&unicode, target)
    }

    /// Transcodes at most `MAX_HOSTNAME_LEN` characters of `unicode`, then
    /// drops trailing characters until the encoded form fits in as many
    /// bytes. Cutting the encoded bytes could split a multibyte sequence.
    fn transcode_bounded(&self, unicode: &str, target: &str) -> Result<Vec<u8>, DomainError> {
        let mut text = match unicode.char_indices().nth(MAX_HOSTNAME_LEN) {
            Some((end, _)) => &unicode[..end],
            None => unicode,
        };

        loop {
            let output = self
                .transcoder
                .transcode(text.as_bytes(), DEFAULT_CHARSET, target)?;
            if output.len() <= MAX_HOSTNAME_LEN {
                return Ok(output);
            }

            match text.char_indices().next_back() {
                Some((last, _)) => text = &text[..last],
                None => return Ok(output),
            }
        }
    }
}
