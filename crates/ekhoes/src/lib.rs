//! ekhoes - Client library for the ekhoes remote service.
//!
//! Provides authentication against an ekhoes server, local persistence of the
//! bearer token, and listing/termination of remote sessions and live
//! connections. All remote calls are authenticated with the stored token,
//! loaded fresh on every request.

pub mod auth;
pub mod base_url;
pub mod client;
pub mod connections;
pub mod credentials;
pub mod error;
pub mod records;
pub mod sessions;
pub mod store;
pub mod token;

pub use auth::{AuthService, LoginOutcome};
pub use base_url::BaseUrl;
pub use client::RemoteClient;
pub use connections::ConnectionService;
pub use credentials::Credentials;
pub use error::Error;
pub use records::{ConnectionRecord, SessionRecord, SessionUser};
pub use sessions::SessionService;
pub use store::TokenStore;
pub use token::Token;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
