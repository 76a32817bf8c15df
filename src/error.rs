use thiserror::Error;

pub type Result<T> = std::result::Result<T, SendlixError>;

/// Every failure a Sendlix call can surface.
///
/// Validation variants are raised before anything is sent. `Transport`
/// carries the remote status untouched.
#[derive(Debug, Error)]
pub enum SendlixError {
    #[error("invalid API key format, expected '<secret>.<keyId>'")]
    InvalidCredentialFormat,

    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("missing required field(s): {}", .fields.join(", "))]
    MissingField { fields: Vec<String> },

    #[error("invalid email address format: {0}")]
    InvalidAddress(String),

    #[error("empty content: {0}")]
    EmptyContent(&'static str),

    #[error("unsupported image MIME type: {0}")]
    UnsupportedMimeType(String),

    #[error("invalid value '{value}', expected one of: {}", .expected.join(", "))]
    InvalidEnumValue { value: String, expected: Vec<String> },

    #[error("{0}")]
    OperationFailed(String),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("remote call failed: {0}")]
    Transport(#[from] tonic::Status),

    #[error("channel setup failed: {0}")]
    Connection(#[from] tonic::transport::Error),

    #[error("invalid host '{0}'")]
    InvalidHost(String),
}

impl SendlixError {
    pub fn missing<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SendlixError::MissingField {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}
