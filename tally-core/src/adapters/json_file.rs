//! JSON file store - whole-file document persistence
//!
//! The document lives in a single JSON file. Writers take an exclusive
//! advisory lock on a sibling `.lock` file for the full load+mutate+persist
//! sequence, so concurrent processes cannot lose updates. Persisting goes
//! through a temp file in the same directory followed by a rename: a
//! failed write leaves the previous snapshot fully intact.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::domain::result::{Error, Result};
use crate::domain::{Document, UserRecord};
use crate::ports::Store;

pub struct JsonFileStore {
    data_path: PathBuf,
    lock_path: PathBuf,
}

impl JsonFileStore {
    /// Open the store, creating the data file seeded with the
    /// administrator's (password-less) record if it does not exist yet.
    pub fn open(data_path: impl Into<PathBuf>, admin_name: &str) -> Result<Self> {
        let data_path = data_path.into();
        let lock_path = data_path.with_extension("lock");
        let store = Self {
            data_path,
            lock_path,
        };

        if !store.data_path.exists() {
            let mut doc = Document::new();
            doc.insert(admin_name.to_string(), UserRecord::new(None));
            store.write_document(&doc)?;
        }

        Ok(store)
    }

    /// Path of the data file
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Copy the current document to a timestamped sibling file and return
    /// its path. Used before destructive operations such as a full store
    /// replacement.
    pub fn backup(&self) -> Result<PathBuf> {
        let stem = self
            .data_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("tally");
        let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        let backup_path = self
            .data_path
            .with_file_name(format!("{stem}-backup-{timestamp}.json"));

        let lock = self.acquire_lock()?;
        let result = fs::copy(&self.data_path, &backup_path)
            .map(|_| backup_path)
            .map_err(|e| Error::storage(format!("failed to write backup: {e}")));
        let _ = lock.unlock();
        result
    }

    fn acquire_lock(&self) -> Result<File> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&self.lock_path)
            .map_err(|e| Error::storage(format!("failed to open lock file: {e}")))?;
        file.lock_exclusive()
            .map_err(|e| Error::storage(format!("failed to lock store: {e}")))?;
        Ok(file)
    }

    fn read_document(&self) -> Result<Document> {
        let content = fs::read_to_string(&self.data_path)
            .map_err(|e| Error::storage(format!("failed to read store: {e}")))?;
        serde_json::from_str(&content).map_err(|e| Error::MalformedDocument(e.to_string()))
    }

    fn write_document(&self, doc: &Document) -> Result<()> {
        let dir = self.data_path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)
            .map_err(|e| Error::storage(format!("failed to create temp file: {e}")))?;
        serde_json::to_writer(&mut tmp, doc)
            .map_err(|e| Error::storage(format!("failed to serialize store: {e}")))?;
        tmp.flush()
            .map_err(|e| Error::storage(format!("failed to flush store: {e}")))?;
        tmp.persist(&self.data_path)
            .map_err(|e| Error::storage(format!("failed to replace store: {e}")))?;
        Ok(())
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> Result<Document> {
        let lock = self.acquire_lock()?;
        let doc = self.read_document();
        let _ = lock.unlock();
        doc
    }

    fn save(&self, doc: &Document) -> Result<()> {
        let lock = self.acquire_lock()?;
        let result = self.write_document(doc);
        let _ = lock.unlock();
        result
    }

    fn update<T>(&self, apply: impl FnOnce(&mut Document) -> Result<T>) -> Result<T> {
        let lock = self.acquire_lock()?;
        let result = (|| {
            let mut doc = self.read_document()?;
            let value = apply(&mut doc)?;
            self.write_document(&doc)?;
            Ok(value)
        })();
        let _ = lock.unlock();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::open(dir.path().join("tally.json"), "Ethan Ryoo").unwrap()
    }

    #[test]
    fn test_open_seeds_admin_record() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let doc = store.load().unwrap();
        assert_eq!(doc.len(), 1);
        let admin = doc.get("Ethan Ryoo").unwrap();
        assert!(admin.password_hash.is_none());
        assert!(admin.transactions.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let mut doc = store.load().unwrap();
        doc.insert("John Smith".to_string(), UserRecord::new(None));
        store.save(&doc).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded, doc);
    }

    #[test]
    fn test_update_persists_on_success() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        store
            .update(|doc| {
                doc.insert("John Smith".to_string(), UserRecord::new(None));
                Ok(())
            })
            .unwrap();

        assert!(store.load().unwrap().contains_key("John Smith"));
    }

    #[test]
    fn test_failed_update_leaves_snapshot_intact() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let before = fs::read_to_string(store.data_path()).unwrap();

        let result: Result<()> = store.update(|doc| {
            doc.insert("John Smith".to_string(), UserRecord::new(None));
            Err(Error::Forbidden)
        });
        assert!(matches!(result, Err(Error::Forbidden)));

        let after = fs::read_to_string(store.data_path()).unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn test_corrupt_file_is_malformed_document() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        fs::write(store.data_path(), "{not json").unwrap();

        assert!(matches!(
            store.load(),
            Err(Error::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_backup_copies_current_document() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let backup_path = store.backup().unwrap();
        assert!(backup_path.exists());
        assert_eq!(
            fs::read_to_string(&backup_path).unwrap(),
            fs::read_to_string(store.data_path()).unwrap()
        );
    }
}
