//! Access gate: maps a resolved identity to permitted operations
//!
//! One designated administrator may do everything for any user; a regular
//! user may only read and self-manage. The gate is a pure decision
//! function with no side effects; unauthenticated callers never reach it
//! (the front-end resolves an identity first).

use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};

/// A resolved caller identity (already authenticated by the front-end)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
}

impl Identity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Operations subject to the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ViewLedger,
    ViewBalance,
    AddTransaction,
    EditTransaction,
    DeleteTransaction,
    ChangePassword,
    RemovePassword,
    ToggleDarkMode,
    CreateUser,
    ReplaceStore,
}

/// Decides whether an identity may perform an operation on a target user
#[derive(Debug, Clone)]
pub struct AccessGate {
    admin_name: String,
}

impl AccessGate {
    pub fn new(admin_name: impl Into<String>) -> Self {
        Self {
            admin_name: admin_name.into(),
        }
    }

    pub fn is_admin(&self, identity: &Identity) -> bool {
        identity.name == self.admin_name
    }

    /// Pure decision: may `identity` perform `op` on `target`?
    pub fn allows(&self, identity: &Identity, target: &str, op: Operation) -> bool {
        if self.is_admin(identity) {
            return true;
        }
        match op {
            Operation::ViewLedger
            | Operation::ViewBalance
            | Operation::ChangePassword
            | Operation::RemovePassword
            | Operation::ToggleDarkMode => identity.name == target,
            Operation::AddTransaction
            | Operation::EditTransaction
            | Operation::DeleteTransaction
            | Operation::CreateUser
            | Operation::ReplaceStore => false,
        }
    }

    /// `allows`, with denial mapped to `Error::Forbidden`
    pub fn check(&self, identity: &Identity, target: &str, op: Operation) -> Result<()> {
        if self.allows(identity, target, op) {
            Ok(())
        } else {
            Err(Error::Forbidden)
        }
    }
}
