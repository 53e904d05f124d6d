//! Auth service - login verification and identity resolution

use std::sync::Arc;

use crate::domain::credential;
use crate::domain::result::{Error, Result};
use crate::domain::{AccessGate, Identity};
use crate::ports::Store;

/// Resolves names and passwords into identities
pub struct AuthService<S> {
    store: Arc<S>,
    gate: AccessGate,
}

impl<S: Store> AuthService<S> {
    pub fn new(store: Arc<S>, gate: AccessGate) -> Self {
        Self { store, gate }
    }

    /// Verify a login attempt.
    ///
    /// A user without a stored hash signs in with any input, including an
    /// empty one. Beyond the initial name lookup, failure reveals only
    /// that the password was wrong.
    pub fn authenticate(&self, name: &str, password: &str) -> Result<Identity> {
        let doc = self.store.load()?;
        let record = doc
            .get(name)
            .ok_or_else(|| Error::UnknownUser(name.to_string()))?;

        if credential::verify_login(record, password)? {
            Ok(Identity::new(name))
        } else {
            Err(Error::IncorrectPassword)
        }
    }

    /// All known user names, the list the sign-in picker shows
    pub fn user_names(&self) -> Result<Vec<String>> {
        Ok(self.store.load()?.keys().cloned().collect())
    }

    pub fn is_admin(&self, identity: &Identity) -> bool {
        self.gate.is_admin(identity)
    }
}
