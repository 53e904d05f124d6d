//! Credential service - password change and removal

use std::sync::Arc;

use crate::domain::credential;
use crate::domain::result::Result;
use crate::domain::{AccessGate, Identity, Operation};
use crate::ports::Store;
use crate::services::{record, record_mut};

/// Drives the per-user password state transitions
pub struct CredentialService<S> {
    store: Arc<S>,
    gate: AccessGate,
}

impl<S: Store> CredentialService<S> {
    pub fn new(store: Arc<S>, gate: AccessGate) -> Self {
        Self { store, gate }
    }

    /// Set an initial password or change an existing one. With a hash
    /// present the old password must verify; the confirmation must match.
    /// No failure path mutates the stored hash.
    pub fn change_password(
        &self,
        identity: &Identity,
        target: &str,
        old_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<()> {
        self.gate.check(identity, target, Operation::ChangePassword)?;
        self.store.update(|doc| {
            credential::change_password(
                record_mut(doc, target)?,
                old_password,
                new_password,
                confirm_password,
            )
        })
    }

    /// Clear the password after verifying the old one; removal with no
    /// password set is an error, never a silent success.
    pub fn remove_password(
        &self,
        identity: &Identity,
        target: &str,
        old_password: &str,
    ) -> Result<()> {
        self.gate.check(identity, target, Operation::RemovePassword)?;
        self.store.update(|doc| {
            credential::remove_password(record_mut(doc, target)?, old_password)
        })
    }

    /// Whether the target currently has a password set (drives whether
    /// the front-end asks for the old one)
    pub fn has_password(&self, identity: &Identity, target: &str) -> Result<bool> {
        self.gate.check(identity, target, Operation::ChangePassword)?;
        let doc = self.store.load()?;
        Ok(record(&doc, target)?.password_hash.is_some())
    }
}
