//! User record and document model
//!
//! The persisted store is a single document keyed by canonical display
//! name. The display name doubles as the user's primary identifier; there
//! is no surrogate id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::transaction::Transaction;

/// The whole persisted snapshot, keyed by canonical user name
pub type Document = BTreeMap<String, UserRecord>;

/// Per-user persisted state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// PHC-format password hash; `None` means "no password required",
    /// which is a valid sign-in state, not an error
    #[serde(rename = "password")]
    pub password_hash: Option<String>,
    /// Display preference, opaque to the core beyond being toggled
    #[serde(default)]
    pub dark_mode: bool,
    /// Ordered newest-first; see the ledger module for the invariant
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl UserRecord {
    /// Fresh record for a newly created user
    pub fn new(password_hash: Option<String>) -> Self {
        Self {
            password_hash,
            dark_mode: false,
            transactions: Vec::new(),
        }
    }
}

/// Form the canonical display name used as the document key.
///
/// Each name part is trimmed, lower-cased, then title-cased (a letter that
/// follows a non-alphabetic character is upper-cased, so "o'brien" becomes
/// "O'Brien"); the parts are joined with a single space. This must stay
/// deterministic: it is the primary key of the persisted document.
pub fn canonical_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", title_case(first_name), title_case(last_name))
}

fn title_case(part: &str) -> String {
    let mut out = String::with_capacity(part.len());
    let mut at_word_start = true;
    for c in part.trim().to_lowercase().chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !c.is_alphabetic();
    }
    out
}
