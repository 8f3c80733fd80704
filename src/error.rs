use std::fmt;
use thiserror::Error;

/// The kind of record a lookup failed to find
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RecordKind {
    Participant,
    Event,
    Template,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Participant => write!(f, "participant"),
            RecordKind::Event => write!(f, "event"),
            RecordKind::Template => write!(f, "template"),
        }
    }
}

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum CertificateError {
    /// A participant, event or template is absent or soft-deleted
    #[error("{kind} {id} not found")]
    NotFound { kind: RecordKind, id: u64 },

    /// Mandatory data needed to render a certificate is missing
    #[error("invalid certificate data: {0}")]
    Validation(String),

    /// A colour in a template or organisation is not a hex code
    #[error("invalid colour {0:?}, expected a hex code such as #9DB5A5")]
    InvalidColour(String),

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FontParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to parse the image
    Image(#[from] image::ImageError),

    #[error("failed to encode QR code: {0}")]
    Qr(#[from] qrcode::types::QrError),

    #[error(transparent)]
    /// The settings file could not be parsed
    Config(#[from] toml::de::Error),

    #[error("malformed data file: {0}")]
    Data(#[from] serde_json::Error),
}

impl CertificateError {
    pub(crate) fn not_found(kind: RecordKind, id: u64) -> CertificateError {
        CertificateError::NotFound { kind, id }
    }

    /// Whether this error means the requested record does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, CertificateError::NotFound { .. })
    }
}
