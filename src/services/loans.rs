//! Loan requests and member voting.

use std::sync::Arc;

use tracing::warn;

use crate::catalog;
use crate::clients::DocumentStore;
use crate::outcome::Outcome;
use crate::records::Loan;
use crate::registry::collections;

pub struct LoanService {
    store: Arc<dyn DocumentStore>,
}

impl LoanService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn request(&self, loan: &Loan) -> Outcome<()> {
        match self
            .store
            .set(collections::LOANS, &loan.id, loan.to_raw())
            .await
        {
            Ok(()) => Outcome::success_empty(),
            Err(err) => Outcome::failure(catalog::loan::REQUEST_FAILED, Some(err.into())),
        }
    }

    /// Records one member's vote: read the loan, upsert the vote, write back.
    /// A member voting again replaces their previous vote.
    pub async fn cast_vote(&self, loan_id: &str, voter_uid: &str, approve: bool) -> Outcome<Loan> {
        let raw = match self.store.get(collections::LOANS, loan_id).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Outcome::failure(catalog::loan::NOT_FOUND, None),
            Err(err) => return Outcome::failure(catalog::loan::VOTE_FAILED, Some(err.into())),
        };
        let mut loan = match Loan::from_raw(loan_id, &raw) {
            Ok(loan) => loan,
            Err(err) => return Outcome::failure(catalog::loan::VOTE_FAILED, Some(err.into())),
        };
        loan.votes.insert(voter_uid.to_string(), approve);
        match self
            .store
            .set(collections::LOANS, loan_id, loan.to_raw())
            .await
        {
            Ok(()) => Outcome::success(loan),
            Err(err) => Outcome::failure(catalog::loan::VOTE_FAILED, Some(err.into())),
        }
    }

    /// Loan requests for a group, most recent first. Undecodable documents
    /// are skipped with a warning.
    pub async fn for_group(&self, group_id: &str) -> Outcome<Vec<Loan>> {
        let docs = match self.store.list(collections::LOANS).await {
            Ok(docs) => docs,
            Err(err) => return Outcome::failure(catalog::loan::LOAD_FAILED, Some(err.into())),
        };
        let mut loans = Vec::new();
        for (id, raw) in &docs {
            match Loan::from_raw(id, raw) {
                Ok(loan) if loan.group_id == group_id => loans.push(loan),
                Ok(_) => {}
                Err(err) => warn!(%id, error = %err, "skipping undecodable loan"),
            }
        }
        loans.sort_by(|a, b| b.requested_at.cmp(&a.requested_at));
        Outcome::success(loans)
    }
}
