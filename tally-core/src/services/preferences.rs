//! Preference service - per-user display preference

use std::sync::Arc;

use crate::domain::result::Result;
use crate::domain::{AccessGate, Identity, Operation};
use crate::ports::Store;
use crate::services::{record, record_mut};

/// Manages the dark-mode flag; the core only flips it
pub struct PreferenceService<S> {
    store: Arc<S>,
    gate: AccessGate,
}

impl<S: Store> PreferenceService<S> {
    pub fn new(store: Arc<S>, gate: AccessGate) -> Self {
        Self { store, gate }
    }

    /// Flip the flag and return its new value
    pub fn toggle_dark_mode(&self, identity: &Identity, target: &str) -> Result<bool> {
        self.gate.check(identity, target, Operation::ToggleDarkMode)?;
        self.store.update(|doc| {
            let record = record_mut(doc, target)?;
            record.dark_mode = !record.dark_mode;
            Ok(record.dark_mode)
        })
    }

    pub fn dark_mode(&self, identity: &Identity, target: &str) -> Result<bool> {
        self.gate.check(identity, target, Operation::ToggleDarkMode)?;
        let doc = self.store.load()?;
        Ok(record(&doc, target)?.dark_mode)
    }
}
