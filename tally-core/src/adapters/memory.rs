//! In-memory store - mutex-guarded document for tests and embedding

use std::sync::Mutex;

use crate::domain::result::{Error, Result};
use crate::domain::{Document, UserRecord};
use crate::ports::Store;

pub struct MemoryStore {
    doc: Mutex<Document>,
}

impl MemoryStore {
    pub fn new(doc: Document) -> Self {
        Self {
            doc: Mutex::new(doc),
        }
    }

    /// Empty store seeded with the administrator's record, mirroring the
    /// file store bootstrap
    pub fn with_admin(admin_name: &str) -> Self {
        let mut doc = Document::new();
        doc.insert(admin_name.to_string(), UserRecord::new(None));
        Self::new(doc)
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, Document>> {
        self.doc
            .lock()
            .map_err(|_| Error::storage("store mutex poisoned"))
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Document> {
        Ok(self.guard()?.clone())
    }

    fn save(&self, doc: &Document) -> Result<()> {
        *self.guard()? = doc.clone();
        Ok(())
    }

    fn update<T>(&self, apply: impl FnOnce(&mut Document) -> Result<T>) -> Result<T> {
        let mut guard = self.guard()?;
        // work on a copy so a failed closure leaves the snapshot untouched
        let mut working = guard.clone();
        let value = apply(&mut working)?;
        *guard = working;
        Ok(value)
    }
}
