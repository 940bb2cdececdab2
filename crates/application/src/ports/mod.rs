mod charset_transcoder;
mod host_resolver;
mod label_codec;

pub use charset_transcoder::CharsetTranscoder;
pub use host_resolver::HostResolver;
pub use label_codec::AsciiLabelCodec;
