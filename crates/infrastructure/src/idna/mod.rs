pub mod encoding_transcoder;
pub mod uts46_codec;

pub use encoding_transcoder::EncodingTranscoder;
pub use uts46_codec::Uts46LabelCodec;
