use crate::DomainError;
use std::fmt;

/// Longest IPv6 presentation form, including the embedded-IPv4 variant.
pub const INET6_ADDRSTRLEN: usize = 46;

/// Host name bound (POSIX `HOST_NAME_MAX` floor).
pub const MAX_HOSTNAME_LEN: usize = 255;

/// Fixed-capacity owned text buffer with explicit length tracking.
///
/// Input longer than `N` bytes is cut to `N` bytes when the buffer is built;
/// the source slice is never read past that point. The content is kept as
/// raw bytes because callers hand over buffers that are not guaranteed to be
/// UTF-8 (or NUL-terminated).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundedText<const N: usize> {
    buf: [u8; N],
    len: usize,
}

pub type PresentationString = BoundedText<INET6_ADDRSTRLEN>;
pub type HostName = BoundedText<MAX_HOSTNAME_LEN>;

impl<const N: usize> BoundedText<N> {
    pub const CAPACITY: usize = N;

    pub fn truncate_from(input: &[u8]) -> Self {
        let len = input.len().min(N);
        let mut buf = [0u8; N];
        buf[..len].copy_from_slice(&input[..len]);
        Self { buf, len }
    }

    /// Like [`truncate_from`](Self::truncate_from) but rejects a zero-length
    /// argument.
    pub fn from_input(input: &[u8]) -> Result<Self, DomainError> {
        if input.is_empty() {
            return Err(DomainError::EmptyInput);
        }
        Ok(Self::truncate_from(input))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The content as text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<const N: usize> From<&str> for BoundedText<N> {
    fn from(text: &str) -> Self {
        Self::truncate_from(text.as_bytes())
    }
}

impl<const N: usize> fmt::Display for BoundedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl<const N: usize> fmt::Debug for BoundedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundedText<{}>({:?})", N, String::from_utf8_lossy(self.as_bytes()))
    }
}
