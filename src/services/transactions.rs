//! Transaction logging and history.

use std::sync::Arc;

use tracing::warn;

use crate::catalog;
use crate::clients::DocumentStore;
use crate::outcome::Outcome;
use crate::records::Transaction;
use crate::registry::collections;

pub struct TransactionService {
    store: Arc<dyn DocumentStore>,
}

impl TransactionService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn log(&self, transaction: &Transaction) -> Outcome<()> {
        match self
            .store
            .set(
                collections::TRANSACTIONS,
                &transaction.id,
                transaction.to_raw(),
            )
            .await
        {
            Ok(()) => Outcome::success_empty(),
            Err(err) => Outcome::failure(catalog::transaction::LOG_FAILED, Some(err.into())),
        }
    }

    /// Transactions for a group, newest first. Undecodable documents are
    /// skipped with a warning.
    pub async fn for_group(&self, group_id: &str) -> Outcome<Vec<Transaction>> {
        let docs = match self.store.list(collections::TRANSACTIONS).await {
            Ok(docs) => docs,
            Err(err) => {
                return Outcome::failure(catalog::transaction::LOAD_FAILED, Some(err.into()));
            }
        };
        let mut transactions = Vec::new();
        for (id, raw) in &docs {
            match Transaction::from_raw(id, raw) {
                Ok(tx) if tx.group_id == group_id => transactions.push(tx),
                Ok(_) => {}
                Err(err) => warn!(%id, error = %err, "skipping undecodable transaction"),
            }
        }
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Outcome::success(transactions)
    }
}
