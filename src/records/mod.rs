//! Strongly-typed domain records and their raw-document conversions.
//!
//! Every record decodes from a raw store document through [`crate::decode`]
//! (identity fields are required, the rest default defensively) and encodes
//! back through [`crate::encode`]. A constructed record never holds a raw
//! untyped value.

pub mod group;
pub mod loan;
pub mod meeting;
pub mod transaction;
pub mod user;

pub use group::Group;
pub use loan::{Loan, LoanStatus};
pub use meeting::Meeting;
pub use transaction::{Transaction, TransactionKind};
pub use user::User;
