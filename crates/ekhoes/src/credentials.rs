//! Login credentials type.

use std::fmt;

use serde::Serialize;

use crate::error::Error;

/// Login credentials for the ekhoes service.
///
/// Holds the email address and password collected at the prompt. Serializes
/// into the `{"email":..,"password":..}` login request body.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental
/// logging. Credentials are transient: they exist only for the duration of a
/// login call and are never persisted.
#[derive(Clone, Serialize)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Create new credentials. Surrounding whitespace is trimmed from both
    /// fields, matching what an interactive prompt delivers.
    pub fn new(email: impl AsRef<str>, password: impl AsRef<str>) -> Self {
        Self {
            email: email.as_ref().trim().to_string(),
            password: password.as_ref().trim().to_string(),
        }
    }

    /// Returns the email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Rejects credentials with an empty email or password.
    ///
    /// Called before any network I/O so incomplete input never produces a
    /// request.
    pub fn validate(&self) -> Result<(), Error> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(Error::validation("empty credentials"));
        }
        Ok(())
    }
}

// Intentionally hide the password in Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hide_password_in_debug() {
        let creds = Credentials::new("user@example.com", "secret123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("user@example.com"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn credentials_trim_whitespace() {
        let creds = Credentials::new("  user@example.com\n", " secret \n");
        assert_eq!(creds.email(), "user@example.com");
        assert!(creds.validate().is_ok());
    }

    #[test]
    fn empty_email_fails_validation() {
        let creds = Credentials::new("", "secret");
        assert!(matches!(creds.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn whitespace_only_password_fails_validation() {
        let creds = Credentials::new("user@example.com", "   ");
        assert!(matches!(creds.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn serializes_to_login_body() {
        let creds = Credentials::new("user@example.com", "secret");
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "user@example.com", "password": "secret"})
        );
    }
}
