pub mod storage_port;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::AppError;

/// Generic persistence for a single named file holding one JSON document
/// (a list or an object).
#[derive(Debug)]
pub struct JsonStore<D> {
    path: PathBuf,
    default: D,
}

impl<D> JsonStore<D>
where
    D: Serialize + DeserializeOwned + Clone,
{
    pub fn new(path: impl Into<PathBuf>, default: D) -> Self {
        Self {
            path: path.into(),
            default,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the backing file.
    ///
    /// A missing file is not an error: it is a first run, so the default
    /// document is written out and returned. Every other I/O or parse
    /// failure is surfaced to the caller.
    pub fn load(&self) -> Result<D, AppError> {
        match fs::read_to_string(&self.path) {
            // serde_json will give an error if data is empty
            Ok(data) if data.trim().is_empty() => {
                self.save(&self.default)?;
                Ok(self.default.clone())
            }
            Ok(data) => {
                let document = serde_json::from_str(&data)?;
                debug!(path = %self.path.display(), "loaded document");
                Ok(document)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                self.save(&self.default)?;
                debug!(path = %self.path.display(), "created store with default content");
                Ok(self.default.clone())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Serializes the document and overwrites the file in full.
    pub fn save(&self, document: &D) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let data = serde_json::to_string(document)?;
        fs::write(&self.path, data)?;
        Ok(())
    }

    /// Removes the backing file. The next `load()` recreates the default.
    pub fn delete(&self) -> Result<(), AppError> {
        fs::remove_file(&self.path)?;
        Ok(())
    }
}

/// A persisted document plus the in-memory records derived from it.
///
/// `post_load` runs once right after `load()` and turns the raw parsed
/// document into domain records; `pre_save` turns them back right before
/// the document is written out.
pub trait Collection {
    type Document: Serialize + DeserializeOwned + Clone;

    fn store(&self) -> &JsonStore<Self::Document>;

    fn post_load(&mut self, document: Self::Document) -> Result<(), AppError>;

    fn pre_save(&self) -> Result<Self::Document, AppError>;

    fn reload(&mut self) -> Result<(), AppError> {
        let document = self.store().load()?;
        self.post_load(document)
    }

    fn persist(&self) -> Result<(), AppError> {
        let document = self.pre_save()?;
        self.store().save(&document)
    }

    fn destroy(&self) -> Result<(), AppError> {
        self.store().delete()
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn first_load_creates_default_content() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("list.json");

        let store: JsonStore<Vec<Value>> = JsonStore::new(&path, Vec::new());

        assert!(!path.exists());
        let document = store.load()?;
        assert!(document.is_empty());

        // The default must land on disk exactly as returned
        assert_eq!(fs::read_to_string(&path)?, "[]");
        Ok(())
    }

    #[test]
    fn save_overwrites_in_full() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("list.json");

        let store: JsonStore<Vec<Value>> = JsonStore::new(&path, Vec::new());

        store.save(&vec![Value::from(1), Value::from(2)])?;
        store.save(&vec![Value::from(3)])?;

        assert_eq!(store.load()?, vec![Value::from(3)]);
        Ok(())
    }

    #[test]
    fn delete_then_load_recreates_default() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("map.json");

        let store: JsonStore<serde_json::Map<String, Value>> =
            JsonStore::new(&path, serde_json::Map::new());

        let mut document = store.load()?;
        document.insert("PORT".to_string(), Value::from(587));
        store.save(&document)?;

        store.delete()?;
        assert!(!path.exists());

        assert!(store.load()?.is_empty());
        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn corrupt_json_is_not_swallowed() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("list.json");

        fs::write(&path, "{not json")?;

        let store: JsonStore<Vec<Value>> = JsonStore::new(&path, Vec::new());
        let err = store.load().unwrap_err();

        assert!(matches!(err, AppError::Json(_)));
        Ok(())
    }

    #[test]
    fn empty_file_counts_as_first_run() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("list.json");

        fs::write(&path, "")?;

        let store: JsonStore<Vec<Value>> = JsonStore::new(&path, Vec::new());
        assert!(store.load()?.is_empty());
        assert_eq!(fs::read_to_string(&path)?, "[]");
        Ok(())
    }
}
