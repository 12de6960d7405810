use thiserror::Error;

/// Errors that can occur when interacting with the SD Elements API.
#[derive(Error, Debug)]
pub enum SdeError {
    /// The server answered with a non-2xx status.
    ///
    /// The display form is the readable error message,
    /// `"{status} {reason}: {body}"`.
    #[error("{status} {reason}: {body}")]
    ApiRequestFailed {
        status: u16,
        reason: String,
        body: String,
    },

    /// The HTTP request failed at the transport level.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The request payload could not be serialized, or the response body
    /// did not have the expected shape.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An HTTP method name outside GET, POST and PUT.
    #[error("Unsupported HTTP method: {0}")]
    InvalidMethod(String),

    /// The server host does not form a valid URL.
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    /// A required configuration value is missing.
    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    /// A request builder is missing a required field.
    #[error("Builder error: {0}")]
    Builder(String),
}

impl SdeError {
    /// Build an [`SdeError::ApiRequestFailed`] from the parts of a failed response.
    pub fn api_request_failed(
        status: u16,
        reason: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self::ApiRequestFailed {
            status,
            reason: reason.into(),
            body: body.into(),
        }
    }

    /// HTTP status of a failed API request, if this is one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiRequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `"{status} {reason}: {body}"` for failed API requests.
    pub fn readable_error_message(&self) -> Option<String> {
        match self {
            Self::ApiRequestFailed { .. } => Some(self.to_string()),
            _ => None,
        }
    }
}

/// Result type alias for SD Elements operations.
pub type SdeResult<T> = std::result::Result<T, SdeError>;
