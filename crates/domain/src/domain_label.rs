use crate::bounded_text::HostName;
use crate::DomainError;
use std::sync::Arc;

/// Character set assumed when a label comes without one.
pub const DEFAULT_CHARSET: &str = "UTF-8";

/// True for the spellings of UTF-8 accepted as a charset name.
pub fn is_utf8_charset(charset: &str) -> bool {
    charset.eq_ignore_ascii_case(DEFAULT_CHARSET) || charset.eq_ignore_ascii_case("utf8")
}

/// A host or domain name handed to the label codec, together with the
/// character set its bytes are (or should be) encoded in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainLabel {
    text: HostName,
    charset: Option<Arc<str>>,
}

impl DomainLabel {
    /// Builds a label from raw caller bytes, cut to the host name bound.
    /// An empty charset counts as no charset.
    pub fn new(input: &[u8], charset: Option<&str>) -> Result<Self, DomainError> {
        let text = HostName::from_input(input)?;
        let charset = charset
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(Arc::from);

        Ok(Self { text, charset })
    }

    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn text(&self) -> &HostName {
        &self.text
    }

    pub fn charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    /// True when the caller's charset is UTF-8 already (explicitly or by default).
    pub fn is_utf8(&self) -> bool {
        self.charset().map_or(true, is_utf8_charset)
    }
}
