//! Collaborator seams: the auth provider and document store the core talks
//! to, plus in-process implementations for tests and local development.

pub mod memory;
pub mod traits;

pub use memory::{MemoryAuth, MemoryStore};
pub use traits::{AuthFault, AuthProvider, DocumentStore, RawRecord};
