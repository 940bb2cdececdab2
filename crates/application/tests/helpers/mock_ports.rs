use ferrous_inet_application::ports::{AsciiLabelCodec, CharsetTranscoder, HostResolver};
use ferrous_inet_domain::DomainError;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct MockHostResolver {
    forward: Arc<RwLock<HashMap<String, Result<Vec<IpAddr>, DomainError>>>>,
    reverse: Arc<RwLock<HashMap<IpAddr, Result<Option<String>, DomainError>>>>,
    forward_calls: Arc<AtomicUsize>,
    reverse_calls: Arc<AtomicUsize>,
}

impl MockHostResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_addresses(&self, host: &str, addresses: &[&str]) {
        let parsed: Vec<IpAddr> = addresses.iter().map(|a| a.parse().unwrap()).collect();
        self.forward
            .write()
            .unwrap()
            .insert(host.to_string(), Ok(parsed));
    }

    pub fn set_forward_error(&self, host: &str, error: DomainError) {
        self.forward
            .write()
            .unwrap()
            .insert(host.to_string(), Err(error));
    }

    pub fn set_hostname(&self, ip: &str, hostname: Option<&str>) {
        self.reverse
            .write()
            .unwrap()
            .insert(ip.parse().unwrap(), Ok(hostname.map(str::to_string)));
    }

    pub fn set_reverse_error(&self, ip: &str, error: DomainError) {
        self.reverse
            .write()
            .unwrap()
            .insert(ip.parse().unwrap(), Err(error));
    }

    pub fn forward_calls(&self) -> usize {
        self.forward_calls.load(Ordering::Relaxed)
    }

    pub fn reverse_calls(&self) -> usize {
        self.reverse_calls.load(Ordering::Relaxed)
    }
}

impl HostResolver for MockHostResolver {
    fn resolve_host(&self, host: &str) -> Result<Vec<IpAddr>, DomainError> {
        self.forward_calls.fetch_add(1, Ordering::Relaxed);
        self.forward
            .read()
            .unwrap()
            .get(host)
            .cloned()
            .unwrap_or_else(|| Err(DomainError::NotFound(host.to_string())))
    }

    fn resolve_hostname(&self, ip: IpAddr) -> Result<Option<String>, DomainError> {
        self.reverse_calls.fetch_add(1, Ordering::Relaxed);
        self.reverse
            .read()
            .unwrap()
            .get(&ip)
            .cloned()
            .unwrap_or(Ok(None))
    }
}

/// Table-driven codec: known pairs convert, ASCII input without a table
/// entry passes through, anything else fails.
#[derive(Clone, Default)]
pub struct MockLabelCodec {
    pairs: Arc<RwLock<Vec<(String, String)>>>,
}

impl MockLabelCodec {
    pub fn new() -> Self {
        let codec = Self::default();
        codec.add_pair("bücher.example", "xn--bcher-kva.example");
        codec.add_pair("münchen.de", "xn--mnchen-3ya.de");
        codec
    }

    pub fn add_pair(&self, unicode: &str, ascii: &str) {
        self.pairs
            .write()
            .unwrap()
            .push((unicode.to_string(), ascii.to_string()));
    }
}

impl AsciiLabelCodec for MockLabelCodec {
    fn to_ascii(&self, unicode: &str) -> Result<String, DomainError> {
        let pairs = self.pairs.read().unwrap();
        if let Some((_, ascii)) = pairs.iter().find(|(u, _)| u == unicode) {
            return Ok(ascii.clone());
        }
        if unicode.is_ascii() {
            return Ok(unicode.to_ascii_lowercase());
        }
        Err(DomainError::LabelCodec(format!("cannot encode {}", unicode)))
    }

    fn to_unicode(&self, ascii: &str) -> Result<String, DomainError> {
        let pairs = self.pairs.read().unwrap();
        if let Some((unicode, _)) = pairs.iter().find(|(_, a)| a.eq_ignore_ascii_case(ascii)) {
            return Ok(unicode.clone());
        }
        if ascii.to_ascii_lowercase().contains("xn--") {
            return Err(DomainError::LabelCodec(format!("cannot decode {}", ascii)));
        }
        Ok(ascii.to_string())
    }
}

/// Understands UTF-8, ISO-8859-1 and (outbound only) UTF-16BE.
#[derive(Clone, Default)]
pub struct MockTranscoder {
    calls: Arc<RwLock<Vec<(String, String)>>>,
}

impl MockTranscoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.read().unwrap().clone()
    }

    fn is_latin1(charset: &str) -> bool {
        charset.eq_ignore_ascii_case("ISO-8859-1") || charset.eq_ignore_ascii_case("latin1")
    }

    fn is_utf8(charset: &str) -> bool {
        charset.eq_ignore_ascii_case("UTF-8")
    }

    fn is_utf16be(charset: &str) -> bool {
        charset.eq_ignore_ascii_case("UTF-16BE")
    }
}

impl CharsetTranscoder for MockTranscoder {
    fn transcode(&self, input: &[u8], from: &str, to: &str) -> Result<Vec<u8>, DomainError> {
        self.calls
            .write()
            .unwrap()
            .push((from.to_string(), to.to_string()));

        if Self::is_latin1(from) && Self::is_utf8(to) {
            return Ok(input.iter().map(|b| *b as char).collect::<String>().into_bytes());
        }

        if Self::is_utf8(from) && Self::is_latin1(to) {
            let text = std::str::from_utf8(input)
                .map_err(|e| DomainError::TranscodeError(e.to_string()))?;
            return text
                .chars()
                .map(|c| {
                    u8::try_from(u32::from(c))
                        .map_err(|_| DomainError::TranscodeError(format!("unmappable {}", c)))
                })
                .collect();
        }

        if Self::is_utf8(from) && Self::is_utf16be(to) {
            let text = std::str::from_utf8(input)
                .map_err(|e| DomainError::TranscodeError(e.to_string()))?;
            return Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect());
        }

        Err(DomainError::TranscodeError(format!(
            "unsupported conversion {} -> {}",
            from, to
        )))
    }
}
