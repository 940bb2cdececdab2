use thiserror::Error;

/// Flag describing why an operation produced no result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    Parse,
    UnrecognizedFamily,
    Mask,
    NotFound,
    Transcode,
    LabelCodec,
    Config,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "EMPTY_INPUT",
            ErrorKind::Parse => "PARSE_ERROR",
            ErrorKind::UnrecognizedFamily => "UNRECOGNIZED_FAMILY",
            ErrorKind::Mask => "MASK_ERROR",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Transcode => "TRANSCODE_ERROR",
            ErrorKind::LabelCodec => "LABEL_CODEC_ERROR",
            ErrorKind::Config => "CONFIG_ERROR",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Empty input")]
    EmptyInput,

    #[error("Invalid {family} address: {input}")]
    ParseError { family: &'static str, input: String },

    #[error("Unrecognized address family for {0}-byte buffer")]
    UnrecognizedFamily(usize),

    #[error("Mask of {bits} bits is out of range for a {width}-bit address")]
    MaskError { bits: i64, width: u32 },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Transcoding failed: {0}")]
    TranscodeError(String),

    #[error("Label codec failed: {0}")]
    LabelCodec(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::EmptyInput => ErrorKind::EmptyInput,
            DomainError::ParseError { .. } => ErrorKind::Parse,
            DomainError::UnrecognizedFamily(_) => ErrorKind::UnrecognizedFamily,
            DomainError::MaskError { .. } => ErrorKind::Mask,
            DomainError::NotFound(_) => ErrorKind::NotFound,
            DomainError::TranscodeError(_) => ErrorKind::Transcode,
            DomainError::LabelCodec(_) => ErrorKind::LabelCodec,
            DomainError::Config(_) => ErrorKind::Config,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }
}
