//! Service layer - business logic orchestration
//!
//! Services coordinate the access gate, domain logic, and the store port.
//! Each service focuses on one feature area; every operation returns a
//! typed result from `domain::result`.

mod admin;
mod auth;
mod credentials;
mod ledger;
pub mod logging;
mod preferences;

pub use admin::{AdminService, ReplaceResult};
pub use auth::AuthService;
pub use credentials::CredentialService;
pub use ledger::{LedgerService, StatementLine};
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use preferences::PreferenceService;

use crate::domain::result::{Error, Result};
use crate::domain::{Document, UserRecord};

pub(crate) fn record<'a>(doc: &'a Document, target: &str) -> Result<&'a UserRecord> {
    doc.get(target)
        .ok_or_else(|| Error::UnknownUser(target.to_string()))
}

pub(crate) fn record_mut<'a>(doc: &'a mut Document, target: &str) -> Result<&'a mut UserRecord> {
    doc.get_mut(target)
        .ok_or_else(|| Error::UnknownUser(target.to_string()))
}
