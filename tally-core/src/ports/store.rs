//! Store port - persisted document abstraction
//!
//! The persisted state is a single whole-document snapshot; there is no
//! finer-grained access. Implementations decide how the document is kept
//! (JSON file, in-memory map) and must make `update` a critical section:
//! one read-modify-write may never interleave with another writer.

use crate::domain::result::Result;
use crate::domain::Document;

/// Whole-document store abstraction
///
/// `update` is the only mutation entry point services use: it loads the
/// snapshot, applies the closure, and persists the result as one unit. If
/// the closure fails, nothing is persisted and the previous snapshot
/// stays fully intact.
pub trait Store: Send + Sync {
    /// Read the whole persisted snapshot
    fn load(&self) -> Result<Document>;

    /// Overwrite the whole persisted snapshot
    fn save(&self, doc: &Document) -> Result<()>;

    /// Atomically load, mutate, and persist the snapshot
    fn update<T>(&self, apply: impl FnOnce(&mut Document) -> Result<T>) -> Result<T>
    where
        Self: Sized;
}
