//! Tally Core - ledger and credential logic for a shared debt tracker
//!
//! This crate implements the core domain logic following hexagonal
//! architecture:
//!
//! - **domain**: entities and engine logic (Transaction, UserRecord,
//!   ledger ordering and balances, access gate, credential lifecycle)
//! - **ports**: trait definition for the persisted document store
//! - **services**: business logic orchestration
//! - **adapters**: concrete store implementations (JSON file, in-memory)
//!
//! The front-end (CLI or any other request layer) resolves an identity,
//! passes raw field values in, and receives typed results or error kinds
//! back; the core never produces markup or user-facing text.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use adapters::JsonFileStore;
use config::Config;
use domain::AccessGate;
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{
    canonical_name, Balance, BalanceDirection, Document, Identity, Transaction, TransactionKind,
    UserRecord,
};

/// Main context for Tally operations
///
/// The primary entry point for front-ends. Holds the configuration, the
/// file-backed store, and all services wired to it.
pub struct TallyContext {
    pub config: Config,
    pub store: Arc<JsonFileStore>,
    pub auth_service: AuthService<JsonFileStore>,
    pub ledger_service: LedgerService<JsonFileStore>,
    pub credential_service: CredentialService<JsonFileStore>,
    pub admin_service: AdminService<JsonFileStore>,
    pub preference_service: PreferenceService<JsonFileStore>,
}

impl TallyContext {
    /// Create a new Tally context rooted at `tally_dir`
    pub fn new(tally_dir: &Path) -> Result<Self> {
        let config = Config::load(tally_dir)?;

        let data_path = tally_dir.join(&config.data_file);
        let store = Arc::new(JsonFileStore::open(data_path, &config.admin_name)?);
        let gate = AccessGate::new(config.admin_name.clone());

        let auth_service = AuthService::new(Arc::clone(&store), gate.clone());
        let ledger_service = LedgerService::new(Arc::clone(&store), gate.clone());
        let credential_service = CredentialService::new(Arc::clone(&store), gate.clone());
        let admin_service = AdminService::new(Arc::clone(&store), gate.clone());
        let preference_service = PreferenceService::new(Arc::clone(&store), gate);

        Ok(Self {
            config,
            store,
            auth_service,
            ledger_service,
            credential_service,
            admin_service,
            preference_service,
        })
    }
}
