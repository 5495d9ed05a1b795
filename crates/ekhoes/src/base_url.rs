//! Base URL type for the remote service.

use std::fmt;

use url::Url;

use crate::error::Error;

/// A validated base URL for the ekhoes service.
///
/// Only `http` and `https` schemes are accepted (`http` is what the mock
/// server in tests speaks; deployments use `https`).
///
/// # Example
///
/// ```
/// use ekhoes::BaseUrl;
///
/// let base = BaseUrl::new("https://websocket.ekhoes.com").unwrap();
/// assert_eq!(base.endpoint("sessions"), "https://websocket.ekhoes.com/sessions");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Parse and validate a base URL.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s)
            .map_err(|e| Error::validation(format!("invalid base URL '{}': {}", s, e)))?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::validation(format!(
                    "invalid base URL '{}': unsupported scheme '{}'",
                    s, other
                )));
            }
        }

        Ok(Self(url))
    }

    /// Returns the full URL for an endpoint path under this base.
    pub fn endpoint(&self, path: &str) -> String {
        // The url crate keeps a trailing slash on root paths; strip it so
        // joins never produce a double slash.
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_https() {
        let base = BaseUrl::new("https://websocket.ekhoes.com").unwrap();
        assert_eq!(base.endpoint("login"), "https://websocket.ekhoes.com/login");
    }

    #[test]
    fn accepts_http_localhost() {
        let base = BaseUrl::new("http://127.0.0.1:8443").unwrap();
        assert_eq!(
            base.endpoint("/sessions"),
            "http://127.0.0.1:8443/sessions"
        );
    }

    #[test]
    fn joins_without_double_slash() {
        let base = BaseUrl::new("https://example.com/").unwrap();
        assert_eq!(
            base.endpoint("session/s-42"),
            "https://example.com/session/s-42"
        );
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(BaseUrl::new("ftp://example.com").is_err());
        assert!(BaseUrl::new("not a url").is_err());
    }
}
