//! Core domain entities and engine logic
//!
//! Pure data structures and functions with validation logic - no I/O or
//! external dependencies beyond the hashing library.

pub mod access;
pub mod credential;
pub mod ledger;
pub mod result;
mod transaction;
mod user;

pub use access::{AccessGate, Identity, Operation};
pub use ledger::{Balance, BalanceDirection};
pub use transaction::{Transaction, TransactionKind};
pub use user::{canonical_name, Document, UserRecord};
