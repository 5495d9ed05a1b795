//! Session listing and termination.

use tracing::{debug, instrument};

use crate::client::RemoteClient;
use crate::error::Error;
use crate::records::SessionRecord;

/// Endpoint for the session collection.
const SESSIONS: &str = "sessions";

/// Queries and mutates the remote session collection.
#[derive(Debug, Clone)]
pub struct SessionService {
    client: RemoteClient,
}

impl SessionService {
    pub fn new(client: RemoteClient) -> Self {
        Self { client }
    }

    /// Fetch a fresh snapshot of all active sessions.
    ///
    /// A malformed record (including an unparseable timestamp) means the
    /// server contract is incompatible and fails the whole call.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<SessionRecord>, Error> {
        let sessions: Vec<SessionRecord> = self.client.get_authed(SESSIONS).await?;
        debug!(count = sessions.len(), "fetched sessions");
        Ok(sessions)
    }

    /// Terminate the session with the given id.
    #[instrument(skip(self))]
    pub async fn kill(&self, session_id: &str) -> Result<(), Error> {
        if session_id.trim().is_empty() {
            return Err(Error::validation("missing session id"));
        }

        debug!(session_id, "terminating session");
        self.client
            .delete_authed(&format!("session/{}", session_id))
            .await
    }
}
