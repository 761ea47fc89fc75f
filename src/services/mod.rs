//! Thin service layer: one remote call in, one typed [`crate::Outcome`] out.
//!
//! No caching, retries, batching, or consistency logic lives here. Every read
//! decodes through [`crate::decode`] before a result is treated as a domain
//! record; every write encodes through the mirrored path; every failure
//! message comes from [`crate::catalog`]. Faults never escape as panics or
//! raw errors.

pub mod auth;
pub mod groups;
pub mod loans;
pub mod meetings;
pub mod transactions;

pub use auth::AuthService;
pub use groups::GroupService;
pub use loans::LoanService;
pub use meetings::MeetingService;
pub use transactions::TransactionService;

use std::sync::Arc;

use crate::clients::{AuthProvider, DocumentStore};

/// All services wired over shared collaborators.
pub struct Services {
    pub auth: AuthService,
    pub groups: GroupService,
    pub transactions: TransactionService,
    pub loans: LoanService,
    pub meetings: MeetingService,
}

impl Services {
    pub fn new(auth: Arc<dyn AuthProvider>, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            auth: AuthService::new(auth, store.clone()),
            groups: GroupService::new(store.clone()),
            transactions: TransactionService::new(store.clone()),
            loans: LoanService::new(store.clone()),
            meetings: MeetingService::new(store),
        }
    }
}
