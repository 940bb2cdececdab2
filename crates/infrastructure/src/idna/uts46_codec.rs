use ferrous_inet_application::ports::AsciiLabelCodec;
use ferrous_inet_domain::DomainError;

/// UTS #46 processing via the `idna` crate, non-strict (no STD3 rules, no
/// DNS length checks).
#[derive(Debug, Default, Clone, Copy)]
pub struct Uts46LabelCodec;

impl Uts46LabelCodec {
    pub fn new() -> Self {
        Self
    }
}

impl AsciiLabelCodec for Uts46LabelCodec {
    fn to_ascii(&self, unicode: &str) -> Result<String, DomainError> {
        ::idna::domain_to_ascii(unicode)
            .map_err(|e| DomainError::LabelCodec(format!("{}: {}", unicode, e)))
    }

    fn to_unicode(&self, ascii: &str) -> Result<String, DomainError> {
        let (unicode, result) = ::idna::domain_to_unicode(ascii);
        result
            .map(|_| unicode)
            .map_err(|e| DomainError::LabelCodec(format!("{}: {}", ascii, e)))
    }
}
