//! Live connection listing.

use tracing::{debug, instrument};

use crate::client::RemoteClient;
use crate::error::Error;
use crate::records::ConnectionRecord;

/// Endpoint for the connection collection.
const CONNECTIONS: &str = "connections";

/// Queries the live transport-level connections on the remote service.
#[derive(Debug, Clone)]
pub struct ConnectionService {
    client: RemoteClient,
}

impl ConnectionService {
    pub fn new(client: RemoteClient) -> Self {
        Self { client }
    }

    /// Fetch a fresh snapshot of all live connections. Same contract as
    /// session listing: a malformed record fails the whole call.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<ConnectionRecord>, Error> {
        let connections: Vec<ConnectionRecord> = self.client.get_authed(CONNECTIONS).await?;
        debug!(count = connections.len(), "fetched connections");
        Ok(connections)
    }
}
