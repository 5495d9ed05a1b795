//! Bearer token type.

use std::fmt;

/// The opaque bearer token issued by the ekhoes service.
///
/// Required on all protected requests; sent raw in the `Authorization`
/// header. Persisted as-is by [`crate::TokenStore`].
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Create a token from its raw string value.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers.
    ///
    /// # Security
    ///
    /// Use only when constructing HTTP requests or persisting the token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the token holds no characters. An empty token is never valid.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Hide the token value in Debug output
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Token").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_hides_value_in_debug() {
        let token = Token::new("abc123-very-secret");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("abc123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn empty_token_reports_empty() {
        assert!(Token::new("").is_empty());
        assert!(!Token::new("abc123").is_empty());
    }
}
