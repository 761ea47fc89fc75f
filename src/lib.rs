//! fincomu-core: data and service core for the fincomu group-savings client.
//!
//! The crate owns the typed outcome container every remote operation returns,
//! the defensive decoding layer between schemaless store documents and typed
//! domain records, the fixed collection/field registry, the user-facing
//! message catalog, and the thin services wiring them to the auth and store
//! collaborators. UI, notification delivery, offline sync, and the concrete
//! managed-platform SDK live outside this crate.

pub mod catalog;
pub mod clients;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod outcome;
pub mod records;
pub mod registry;
pub mod services;

pub use error::{CoreError, Result};
pub use outcome::Outcome;

// Load env from a simple, standardized location resolution.
// This uses dotenvy::dotenv().ok() which loads .env if present and silently ignores if missing.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}

/// Install the tracing subscriber for host applications. Honors RUST_LOG;
/// defaults to info. Safe to call more than once.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
