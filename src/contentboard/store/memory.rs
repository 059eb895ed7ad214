use super::BlobStore;
use crate::error::{BoardError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory blob store for testing and development.
/// Does NOT persist data.
///
/// Uses `RefCell` for interior mutability since the board is single-threaded.
#[derive(Debug, Default)]
pub struct MemBlobStore {
    blobs: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `blob` under `key`.
    pub fn with_blob(key: &str, blob: &str) -> Self {
        let store = Self::new();
        store
            .blobs
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        store
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }
}

impl BlobStore for MemBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, blob: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(BoardError::Store("Simulated write error".to_string()));
        }
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{ContentType, Record};

    pub const KEY: &str = "contents";

    pub struct StoreFixture {
        records: Vec<Record>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                records: Vec::new(),
            }
        }

        pub fn with_record(
            mut self,
            id: &str,
            content_type: ContentType,
            visibility: bool,
            tags: &[&str],
        ) -> Self {
            let mut record = Record::blank(id);
            record.is_new = false;
            record.title = format!("Record {}", id);
            record.content_type = content_type;
            record.visibility = visibility;
            record.tags = tags.iter().map(|t| t.to_string()).collect();
            self.records.push(record);
            self
        }

        /// A store holding the fixture records under [`KEY`].
        pub fn build(self) -> MemBlobStore {
            let blob = serde_json::to_string(&self.records).expect("fixture records encode");
            MemBlobStore::with_blob(KEY, &blob)
        }
    }
}
