//! Error types for the ekhoes library.
//!
//! One unified error enum with explicit variants so callers can tell local
//! input problems, filesystem failures, unreachable-server conditions and
//! server rejections apart.

use thiserror::Error;

/// The unified error type for ekhoes operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad or missing local input (empty credentials, missing session id).
    /// Always detected before any network call.
    #[error("{0}")]
    Validation(String),

    /// An expected local resource is absent (no stored token).
    #[error("{0}")]
    NotFound(String),

    /// Filesystem access failure other than not-found.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The remote service could not be reached (connection, DNS, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// The request exceeded the client's bounded timeout.
    #[error("request timed out")]
    Timeout,

    /// The remote response violates the expected schema (missing token
    /// field, malformed JSON, unparseable timestamp).
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The server answered with a non-2xx status. The Display output is the
    /// response body verbatim: the server sends human-readable error text,
    /// not a structured envelope.
    #[error("{body}")]
    Rejected { status: u16, body: String },
}

impl Error {
    /// Shorthand for a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    /// Shorthand for a protocol error.
    pub fn protocol(message: impl Into<String>) -> Self {
        Error::Protocol(message.into())
    }

    /// HTTP status of a server rejection, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else {
            // Connect, DNS and TLS failures all mean "could not reach the
            // server", distinct from an HTTP-status rejection.
            Error::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Protocol(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_displays_body_verbatim() {
        let err = Error::Rejected {
            status: 401,
            body: "invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "invalid credentials");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn validation_displays_raw_message() {
        let err = Error::validation("empty credentials");
        assert_eq!(err.to_string(), "empty credentials");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn json_errors_map_to_protocol() {
        let err: Error = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, Error::Protocol(_)));
    }
}
