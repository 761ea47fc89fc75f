//! Authentication operations: credential exchange plus profile access.

use std::sync::Arc;

use chrono::Local;
use tracing::{debug, warn};

use crate::catalog;
use crate::clients::{AuthFault, AuthProvider, DocumentStore};
use crate::outcome::Outcome;
use crate::records::User;
use crate::registry::collections;

pub struct AuthService {
    provider: Arc<dyn AuthProvider>,
    store: Arc<dyn DocumentStore>,
}

impl AuthService {
    pub fn new(provider: Arc<dyn AuthProvider>, store: Arc<dyn DocumentStore>) -> Self {
        Self { provider, store }
    }

    /// Signs in and fetches the member profile: two remote calls, the fault
    /// of either translated through the catalog.
    pub async fn sign_in(&self, email: &str, password: &str) -> Outcome<User> {
        let uid = match self.provider.sign_in(email, password).await {
            Ok(uid) => uid,
            Err(fault) => return translate(fault),
        };
        debug!(%uid, "credential exchange accepted, fetching profile");
        match self.store.get(collections::USERS, &uid).await {
            Ok(Some(raw)) => match User::from_raw(&raw) {
                Ok(user) => Outcome::success(user),
                Err(err) => {
                    warn!(%uid, error = %err, "stored profile failed to decode");
                    Outcome::failure(catalog::auth::PROFILE_INVALID, Some(err.into()))
                }
            },
            Ok(None) => Outcome::failure(catalog::auth::PROFILE_MISSING, None),
            Err(err) => Outcome::failure(catalog::generic::UNEXPECTED, Some(err.into())),
        }
    }

    /// Registers a new account and writes the initial profile document.
    pub async fn register(&self, email: &str, password: &str, name: &str) -> Outcome<User> {
        let uid = match self.provider.register(email, password).await {
            Ok(uid) => uid,
            Err(fault) => return translate(fault),
        };
        let user = User {
            uid,
            name: name.to_string(),
            email: email.to_string(),
            registered_at: Local::now(),
            active: true,
            group_ids: Vec::new(),
        };
        match self
            .store
            .set(collections::USERS, &user.uid, user.to_raw())
            .await
        {
            Ok(()) => Outcome::success(user),
            Err(err) => {
                warn!(uid = %user.uid, error = %err, "profile write failed after registration");
                Outcome::failure(catalog::auth::PROFILE_SAVE_FAILED, Some(err.into()))
            }
        }
    }

    pub async fn sign_out(&self) -> Outcome<()> {
        match self.provider.sign_out().await {
            Ok(()) => Outcome::success_empty(),
            Err(fault) => translate(fault),
        }
    }
}

/// Maps a provider fault to a catalog-message failure, keeping the original
/// fault as the opaque cause.
fn translate<T>(fault: AuthFault) -> Outcome<T> {
    warn!(code = fault.code(), "auth provider rejected operation");
    let message = catalog::auth_message(fault.code());
    Outcome::failure(message, Some(anyhow::Error::new(fault)))
}
