use crate::error::{SdeError, SdeResult};
use secrecy::{ExposeSecret, SecretString};

/// Environment variable read by [`SdeCredential::from_env`].
pub const API_TOKEN_ENV: &str = "SDE_API_TOKEN";

/// An SD Elements API token.
///
/// Sent as `Authorization: Token <value>`. The value is never validated
/// locally; a malformed token surfaces as a 401 from the server.
#[derive(Clone)]
pub struct SdeCredential {
    token: SecretString,
}

impl SdeCredential {
    /// Create a credential from an API token.
    pub fn api_token(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
        }
    }

    /// Read the token from the `SDE_API_TOKEN` environment variable.
    ///
    /// Call this once at startup and hand the result to the client builder;
    /// the client itself never looks at the environment.
    pub fn from_env() -> SdeResult<Self> {
        match std::env::var(API_TOKEN_ENV) {
            Ok(token) => Ok(Self::api_token(token)),
            Err(_) => Err(SdeError::MissingConfig(format!(
                "API token is required. Set the {API_TOKEN_ENV} env var."
            ))),
        }
    }

    /// The `Authorization` header value.
    pub fn header_value(&self) -> String {
        format!("Token {}", self.token.expose_secret())
    }
}

impl std::fmt::Debug for SdeCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SdeCredential(****)")
    }
}
