//! Admin service - user creation and whole-store replacement

use std::sync::Arc;

use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::{canonical_name, credential, AccessGate, Document, Identity, Operation, UserRecord};
use crate::ports::Store;

/// Result of a whole-store replacement
#[derive(Debug, Serialize)]
pub struct ReplaceResult {
    pub users: usize,
}

/// Administrator-only operations
pub struct AdminService<S> {
    store: Arc<S>,
    gate: AccessGate,
}

impl<S: Store> AdminService<S> {
    pub fn new(store: Arc<S>, gate: AccessGate) -> Self {
        Self { store, gate }
    }

    /// Create a user keyed by the canonical form of the given names.
    ///
    /// A blank password means the user signs in without one. Returns the
    /// canonical name the record was stored under.
    pub fn create_user(
        &self,
        identity: &Identity,
        first_name: &str,
        last_name: &str,
        password: Option<&str>,
    ) -> Result<String> {
        self.gate.check(identity, "", Operation::CreateUser)?;

        let name = canonical_name(first_name, last_name);
        let password_hash = match password {
            Some(pw) if !pw.is_empty() => Some(credential::hash_password(pw)?),
            _ => None,
        };

        self.store.update(|doc| {
            if doc.contains_key(&name) {
                return Err(Error::UserAlreadyExists(name.clone()));
            }
            doc.insert(name.clone(), UserRecord::new(password_hash));
            Ok(())
        })?;
        Ok(name)
    }

    /// Replace the entire persisted document with `raw` (a JSON document).
    /// Parsing happens before anything is touched; a malformed document
    /// leaves the current snapshot intact.
    pub fn replace_store(&self, identity: &Identity, raw: &str) -> Result<ReplaceResult> {
        self.gate.check(identity, "", Operation::ReplaceStore)?;

        let parsed: Document =
            serde_json::from_str(raw).map_err(|e| Error::MalformedDocument(e.to_string()))?;
        let users = parsed.len();

        self.store.update(|doc| {
            *doc = parsed;
            Ok(())
        })?;
        Ok(ReplaceResult { users })
    }
}
