//! Authentication: login and logout.

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::client::RemoteClient;
use crate::credentials::Credentials;
use crate::error::Error;
use crate::store::TokenStore;
use crate::token::Token;

/// Endpoint for session creation.
const LOGIN: &str = "login";

/// Response from a successful login.
///
/// The server returns additional fields; only the token is contractual. A
/// response without a string `token` fails the decode and the login.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    #[serde(default)]
    name: String,
}

/// Result of a successful login, for the confirmation message.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    /// Display name returned by the server; may be empty if it sent none.
    pub name: String,
}

/// Drives credential validation, the login call, and token persistence.
///
/// The only component allowed to create or delete the stored token.
#[derive(Debug, Clone)]
pub struct AuthService {
    client: RemoteClient,
    store: TokenStore,
}

impl AuthService {
    pub fn new(client: RemoteClient, store: TokenStore) -> Self {
        Self { client, store }
    }

    /// Log in with the given credentials and persist the issued token.
    ///
    /// Validation happens before any network I/O; a response whose shape
    /// violates the contract leaves no token behind.
    #[instrument(skip(self, credentials))]
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome, Error> {
        credentials.validate()?;

        debug!(email = credentials.email(), "logging in");

        let response: LoginResponse = self
            .client
            .post_json(LOGIN, &[("nosession", "1")], credentials)
            .await?;

        let token = Token::new(response.token);
        if token.is_empty() {
            return Err(Error::protocol("login response contained an empty token"));
        }

        self.store.save(&token)?;

        Ok(LoginOutcome {
            name: response.name,
        })
    }

    /// Delete the stored token, ending the local session.
    pub fn logout(&self) -> Result<(), Error> {
        match self.store.delete() {
            Err(Error::NotFound(_)) => {
                Err(Error::NotFound("no active session to log out of".to_string()))
            }
            other => other,
        }
    }
}
