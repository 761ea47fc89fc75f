//! In-process collaborator implementations backed by hash maps.
//!
//! These exist for tests and local development; the managed-platform clients
//! live outside this crate behind the same traits.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::traits::{AuthFault, AuthProvider, DocumentStore, RawRecord};
use crate::error::Result;

/// Document store over nested maps. Collections are created on first write.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, BTreeMap<String, RawRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, key: &str) -> Result<Option<RawRecord>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(key))
            .cloned())
    }

    async fn set(&self, collection: &str, key: &str, record: RawRecord) -> Result<()> {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), record);
        Ok(())
    }

    async fn delete(&self, collection: &str, key: &str) -> Result<()> {
        let mut collections = self.collections.write().await;
        if let Some(docs) = collections.get_mut(collection) {
            docs.remove(key);
        }
        Ok(())
    }

    async fn list(&self, collection: &str) -> Result<Vec<(String, RawRecord)>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(key, record)| (key.clone(), record.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }
}

struct Account {
    uid: String,
    password: String,
}

/// Auth provider over an in-memory account table.
#[derive(Default)]
pub struct MemoryAuth {
    accounts: RwLock<HashMap<String, Account>>,
    next_id: AtomicU64,
}

impl MemoryAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preloads an account, for tests that sign in without registering.
    pub async fn seed(&self, email: &str, password: &str, uid: &str) {
        let mut accounts = self.accounts.write().await;
        accounts.insert(
            email.to_string(),
            Account {
                uid: uid.to_string(),
                password: password.to_string(),
            },
        );
    }
}

#[async_trait]
impl AuthProvider for MemoryAuth {
    async fn sign_in(&self, email: &str, password: &str)
    -> std::result::Result<String, AuthFault> {
        let accounts = self.accounts.read().await;
        let account = accounts.get(email).ok_or(AuthFault::UserNotFound)?;
        if account.password != password {
            return Err(AuthFault::WrongPassword);
        }
        Ok(account.uid.clone())
    }

    async fn register(&self, email: &str, password: &str)
    -> std::result::Result<String, AuthFault> {
        if !email.contains('@') {
            return Err(AuthFault::InvalidEmail);
        }
        if password.len() < 6 {
            return Err(AuthFault::WeakPassword);
        }
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(email) {
            return Err(AuthFault::EmailAlreadyInUse);
        }
        let uid = format!("u{}", self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        accounts.insert(
            email.to_string(),
            Account {
                uid: uid.clone(),
                password: password.to_string(),
            },
        );
        Ok(uid)
    }

    async fn sign_out(&self) -> std::result::Result<(), AuthFault> {
        Ok(())
    }
}
