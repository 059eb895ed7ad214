use super::BlobStore;
use crate::error::Result;
use crate::model::Record;
use crate::seed::seed_records;
use log::{debug, info, warn};
use serde_json::Value;
use std::collections::HashSet;

/// Owner of the canonical record sequence and its persisted blob.
///
/// The in-memory collection is authoritative; the blob under `key` is a snapshot of it.
pub struct RecordStore<B: BlobStore> {
    backend: B,
    key: String,
    records: Vec<Record>,
}

impl<B: BlobStore> RecordStore<B> {
    /// Reads the collection from `backend`.
    ///
    /// An absent or unreadable blob falls back to the seed dataset, which is written back
    /// immediately. Entries that fail to decode, and repeats of an id already seen, are
    /// dropped. A stored empty array is an empty board, not a reason to reseed.
    pub fn load(backend: B, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let blob = backend.get(&key)?;

        let decoded = match blob {
            None => {
                info!("No records stored under '{}', seeding", key);
                None
            }
            Some(blob) => decode_blob(&key, &blob),
        };

        let mut store = Self {
            backend,
            key,
            records: Vec::new(),
        };

        match decoded {
            Some(records) => store.records = records,
            None => {
                store.records = seed_records();
                store.persist()?;
            }
        }

        debug!("Loaded {} records from '{}'", store.records.len(), store.key);
        Ok(store)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Writes the whole collection. An empty collection is not written; returns whether a
    /// write happened.
    pub fn persist(&self) -> Result<bool> {
        if self.records.is_empty() {
            debug!("Skipping write of empty collection to '{}'", self.key);
            return Ok(false);
        }
        let blob = serde_json::to_string(&self.records)?;
        self.backend.set(&self.key, &blob)?;
        Ok(true)
    }

    /// Removes the entry with `id` straight from the stored array, leaving every other
    /// stored entry untouched. Returns whether the stored blob changed.
    pub fn purge_persisted(&self, id: &str) -> Result<bool> {
        let Some(blob) = self.backend.get(&self.key)? else {
            return Ok(false);
        };
        let mut entries = match serde_json::from_str::<Value>(&blob) {
            Ok(Value::Array(entries)) => entries,
            _ => {
                warn!("Stored blob '{}' is not a record array, nothing to purge", self.key);
                return Ok(false);
            }
        };

        let before = entries.len();
        entries.retain(|entry| entry_id(entry).as_deref() != Some(id));
        if entries.len() == before {
            return Ok(false);
        }

        let blob = serde_json::to_string(&entries)?;
        self.backend.set(&self.key, &blob)?;
        Ok(true)
    }
}

/// `None` means the blob is unusable and the seed should replace it.
fn decode_blob(key: &str, blob: &str) -> Option<Vec<Record>> {
    let entries = match serde_json::from_str::<Value>(blob) {
        Ok(Value::Array(entries)) => entries,
        Ok(_) => {
            warn!("Stored blob '{}' is not an array, reseeding", key);
            return None;
        }
        Err(e) => {
            warn!("Stored blob '{}' is not valid JSON ({}), reseeding", key, e);
            return None;
        }
    };

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(entries.len());
    for (position, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Record>(entry) {
            Ok(record) => {
                if seen.insert(record.id.clone()) {
                    records.push(record);
                } else {
                    warn!("Dropping duplicate record id '{}' in '{}'", record.id, key);
                }
            }
            Err(e) => warn!("Dropping undecodable entry #{} in '{}': {}", position, key, e),
        }
    }
    Some(records)
}

fn entry_id(entry: &Value) -> Option<String> {
    match entry.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{StoreFixture, KEY};
    use crate::store::memory::MemBlobStore;
    use crate::model::ContentType;

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    fn stored(store: &RecordStore<MemBlobStore>) -> Value {
        let blob = store.backend().get(KEY).unwrap().unwrap();
        serde_json::from_str(&blob).unwrap()
    }

    #[test]
    fn absent_blob_seeds_and_persists() {
        let store = RecordStore::load(MemBlobStore::new(), KEY).unwrap();

        assert_eq!(store.records(), &seed_records()[..]);
        assert_eq!(store.backend().write_count(), 1);
        assert_eq!(stored(&store).as_array().unwrap().len(), 10);
    }

    #[test]
    fn malformed_blob_seeds() {
        let store = RecordStore::load(MemBlobStore::with_blob(KEY, "{not json"), KEY).unwrap();
        assert_eq!(store.records().len(), 10);
        assert_eq!(store.backend().write_count(), 1);
    }

    #[test]
    fn non_array_blob_seeds() {
        let store =
            RecordStore::load(MemBlobStore::with_blob(KEY, r#"{"id":"1"}"#), KEY).unwrap();
        assert_eq!(store.records(), &seed_records()[..]);
    }

    #[test]
    fn stored_records_load_in_order() {
        let backend = StoreFixture::new()
            .with_record("3", ContentType::Review, true, &["api"])
            .with_record("1", ContentType::Protocol, false, &[])
            .build();
        let store = RecordStore::load(backend, KEY).unwrap();

        assert_eq!(ids(store.records()), vec!["3", "1"]);
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn empty_array_is_an_empty_board() {
        let store = RecordStore::load(MemBlobStore::with_blob(KEY, "[]"), KEY).unwrap();
        assert!(store.records().is_empty());
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn undecodable_entries_and_duplicates_are_dropped() {
        let blob = r#"[
            {"id":"1","type":"REVIEW","visibility":true},
            {"id":"2","type":"PODCAST","visibility":true},
            {"title":"no id"},
            {"id":"1","type":"PROTOCOL","visibility":false},
            {"id":"3","type":"BLOG_POST","visibility":false}
        ]"#;
        let store = RecordStore::load(MemBlobStore::with_blob(KEY, blob), KEY).unwrap();

        assert_eq!(ids(store.records()), vec!["1", "3"]);
        assert_eq!(store.records()[0].content_type, ContentType::Review);
    }

    #[test]
    fn persist_writes_the_full_collection() {
        let mut store = RecordStore::load(MemBlobStore::with_blob(KEY, "[]"), KEY).unwrap();
        store.set_records(vec![Record::blank("5"), Record::blank("4")]);

        assert!(store.persist().unwrap());
        let value = stored(&store);
        assert_eq!(value[0]["id"], "5");
        assert_eq!(value[1]["id"], "4");
    }

    #[test]
    fn persist_skips_empty_collection() {
        let backend = StoreFixture::new()
            .with_record("1", ContentType::Review, true, &[])
            .build();
        let mut store = RecordStore::load(backend, KEY).unwrap();
        store.set_records(Vec::new());

        assert!(!store.persist().unwrap());
        assert_eq!(store.backend().write_count(), 0);
        assert_eq!(stored(&store).as_array().unwrap().len(), 1);
    }

    #[test]
    fn purge_removes_only_the_matching_entry() {
        let backend = StoreFixture::new()
            .with_record("1", ContentType::Review, true, &[])
            .with_record("2", ContentType::Review, true, &[])
            .build();
        let store = RecordStore::load(backend, KEY).unwrap();

        assert!(store.purge_persisted("1").unwrap());
        let value = stored(&store);
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["id"], "2");

        assert!(!store.purge_persisted("1").unwrap());
    }

    #[test]
    fn purge_of_the_last_entry_leaves_an_empty_array() {
        let backend = StoreFixture::new()
            .with_record("1", ContentType::Review, true, &[])
            .build();
        let store = RecordStore::load(backend, KEY).unwrap();

        store.purge_persisted("1").unwrap();
        assert_eq!(store.backend().get(KEY).unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn write_failures_propagate() {
        let backend = MemBlobStore::new();
        backend.set_simulate_write_error(true);
        assert!(RecordStore::load(backend, KEY).is_err());
    }
}
