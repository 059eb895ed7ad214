use super::{is_valid_key, BlobStore};
use crate::error::{BoardError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed blob store: each key maps to `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`.
    pub fn blob_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(BoardError::Io)?;
        }
        Ok(())
    }
}

fn validate_key(key: &str) -> Result<()> {
    if is_valid_key(key) {
        Ok(())
    } else {
        Err(BoardError::Store(format!("Invalid storage key: '{}'", key)))
    }
}

impl BlobStore for FsBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(BoardError::Io)?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, blob: &str) -> Result<()> {
        let path = self.blob_path(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, blob).map_err(BoardError::Io)?;
        fs::rename(&tmp_path, path).map_err(BoardError::Io)?;

        Ok(())
    }
}
