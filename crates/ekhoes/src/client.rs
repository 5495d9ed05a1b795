//! HTTP client for the ekhoes remote API.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use crate::base_url::BaseUrl;
use crate::error::Error;
use crate::store::TokenStore;

/// Default bound on how long a single request may take. The server streams
/// nothing, so a call that has not completed by now is stuck.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for authenticated requests against a configured base URL.
///
/// Protected calls read the token from the [`TokenStore`] on every request
/// rather than caching it, and send it raw in the `Authorization` header (the
/// ekhoes server expects the bare token, no scheme prefix). A non-2xx status
/// surfaces as [`Error::Rejected`] carrying the response body verbatim.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
    base: BaseUrl,
    store: TokenStore,
}

impl RemoteClient {
    /// Create a client for the given base URL, reading tokens from `store`.
    pub fn new(base: BaseUrl, store: TokenStore) -> Self {
        Self::with_timeout(base, store, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout. Expiry surfaces as
    /// [`Error::Timeout`], distinct from other network failures.
    pub fn with_timeout(base: BaseUrl, store: TokenStore, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("ekhoes/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        Self { http, base, store }
    }

    /// Returns the base URL this client is configured for.
    pub fn base(&self) -> &BaseUrl {
        &self.base
    }

    /// Make an unauthenticated POST with a JSON body and query parameters.
    #[instrument(skip(self, body), fields(base = %self.base))]
    pub async fn post_json<B, R>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<R, Error>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.base.endpoint(path);
        debug!(path, "POST");

        let response = self
            .http
            .post(&url)
            .query(query)
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make an authenticated GET request.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn get_authed<R>(&self, path: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let url = self.base.endpoint(path);
        debug!(path, "authenticated GET");

        let response = self
            .http
            .get(&url)
            .headers(self.auth_headers()?)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make an authenticated DELETE request, expecting no response body.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn delete_authed(&self, path: &str) -> Result<(), Error> {
        let url = self.base.endpoint(path);
        debug!(path, "authenticated DELETE");

        let response = self
            .http
            .delete(&url)
            .headers(self.auth_headers()?)
            .send()
            .await?;

        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            Ok(())
        } else {
            Err(self.rejection(response).await)
        }
    }

    /// Authorization headers for protected requests. The token is loaded
    /// from the store on every call, never cached across calls.
    fn auth_headers(&self) -> Result<HeaderMap, Error> {
        let token = self.store.load()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(token.as_str())
                .map_err(|_| Error::protocol("stored token contains invalid header characters"))?,
        );
        Ok(headers)
    }

    /// Decode a success body, or surface a rejection.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            let bytes = response.bytes().await?;
            Ok(serde_json::from_slice(&bytes)?)
        } else {
            Err(self.rejection(response).await)
        }
    }

    /// Build a rejection error from a non-2xx response. The body is the
    /// server's human-readable error text, passed through verbatim.
    async fn rejection(&self, response: reqwest::Response) -> Error {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Error::Rejected { status, body }
    }
}
