use std::fmt;

/// Result type for onebridge-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a platform event
///
/// An unsupported event type is not an error: converters return `Ok(None)`.
#[derive(Debug)]
pub enum Error {
    /// Payload is not a JSON object
    InvalidPayload(String),

    /// `header.eventType` is absent, not a string, or empty
    MissingEventType,

    /// Building an extension value failed
    Json(serde_json::Error),

    /// Provider not found in the registry
    Provider(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPayload(msg) => write!(f, "Invalid payload: {}", msg),
            Error::MissingEventType => write!(f, "Invalid payload: missing header.eventType"),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Provider(msg) => write!(f, "Provider error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::InvalidPayload(_) | Error::MissingEventType | Error::Provider(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl Error {
    /// True for failures caused by the caller's input (reject the webhook)
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::InvalidPayload(_) | Error::MissingEventType)
    }
}
