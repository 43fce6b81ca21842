use thiserror::Error;

/// Failure reported by the provider itself: the request was understood but
/// `error_code` in the response was not `0`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (error_code {code})")]
pub struct ProviderError {
    pub message: String,
    pub code: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
        }
    }
}

/// Malformed response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line} has no `=` separator: {content:?}")]
    MissingSeparator { line: usize, content: String },
}

#[derive(Debug, Error)]
pub enum Error {
    // Provider kind
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    // Transport kind
    #[error("HTTP GET failed: {0}")]
    HttpGet(String),
    #[error("HTTP GET returned status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("failed to read response body: {0}")]
    ResponseBody(String),
    #[error("malformed response: {0}")]
    Parse(#[from] ParseError),

    // Construction
    #[error("invalid endpoint: {0}")]
    Url(#[from] url::ParseError),
    #[error("{0} must not be empty")]
    EmptyCredential(&'static str),
}

impl Error {
    /// The provider answered and rejected the request.
    pub fn is_provider(&self) -> bool {
        matches!(self, Error::Provider(_))
    }

    /// The provider could not be reached, or its answer could not be read.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::HttpGet(_)
                | Error::HttpStatus { .. }
                | Error::ResponseBody(_)
                | Error::Parse(_)
        )
    }

    pub fn as_provider(&self) -> Option<&ProviderError> {
        match self {
            Error::Provider(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
