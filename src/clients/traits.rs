use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::error::Result;

/// Schemaless document as stored and retrieved: string keys, arbitrary values.
pub type RawRecord = Map<String, Value>;

/// Fixed fault vocabulary reported by the auth provider.
///
/// The display form is the wire code; [`AuthFault::code`] feeds the catalog
/// translation table.
#[derive(Debug, Error)]
pub enum AuthFault {
    #[error("user-not-found")]
    UserNotFound,
    #[error("wrong-password")]
    WrongPassword,
    #[error("invalid-credential")]
    InvalidCredential,
    #[error("email-already-in-use")]
    EmailAlreadyInUse,
    #[error("weak-password")]
    WeakPassword,
    #[error("invalid-email")]
    InvalidEmail,
    #[error("user-disabled")]
    UserDisabled,
    #[error("too-many-requests")]
    TooManyRequests,
    #[error("network-request-failed")]
    NetworkRequestFailed,
    /// Provider fault outside the fixed vocabulary, carrying its raw code.
    #[error("{0}")]
    Other(String),
}

impl AuthFault {
    pub fn code(&self) -> &str {
        match self {
            AuthFault::UserNotFound => "user-not-found",
            AuthFault::WrongPassword => "wrong-password",
            AuthFault::InvalidCredential => "invalid-credential",
            AuthFault::EmailAlreadyInUse => "email-already-in-use",
            AuthFault::WeakPassword => "weak-password",
            AuthFault::InvalidEmail => "invalid-email",
            AuthFault::UserDisabled => "user-disabled",
            AuthFault::TooManyRequests => "too-many-requests",
            AuthFault::NetworkRequestFailed => "network-request-failed",
            AuthFault::Other(code) => code,
        }
    }
}

/// Email/password credential exchange. Success yields the session principal
/// (a stable uid); failure yields a categorized fault.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str)
    -> std::result::Result<String, AuthFault>;

    async fn register(&self, email: &str, password: &str)
    -> std::result::Result<String, AuthFault>;

    async fn sign_out(&self) -> std::result::Result<(), AuthFault>;
}

/// Get/set-by-key access to named collections of raw records.
///
/// Cancellation and timeouts live behind this seam; once a response crosses
/// it, decoding is synchronous.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, key: &str) -> Result<Option<RawRecord>>;

    async fn set(&self, collection: &str, key: &str, record: RawRecord) -> Result<()>;

    async fn delete(&self, collection: &str, key: &str) -> Result<()>;

    /// All documents in a collection, keyed. Filtering happens client-side,
    /// as the original screens did.
    async fn list(&self, collection: &str) -> Result<Vec<(String, RawRecord)>>;
}
