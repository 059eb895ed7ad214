//! # Storage Layer
//!
//! Persistence is a flat key-value blob store: a string blob per key, nothing more. The
//! [`BlobStore`] trait is that contract; [`RecordStore`] sits on top of it and owns the
//! record collection, its JSON encoding and the self-healing load.
//!
//! ## Implementations
//!
//! - [`fs::FsBlobStore`]: Production store, one `<key>.json` file per key in the board
//!   directory, written atomically (temp file + rename).
//! - [`memory::MemBlobStore`]: In-memory store for testing, with write error simulation.
//!
//! ## Storage Layout
//!
//! ```text
//! .contentboard/
//! ├── contents.json       # The record blob (JSON array)
//! └── config.json         # Board configuration
//! ```
//!
//! There is no coordination between processes: the last writer wins.

use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod records;

pub use records::RecordStore;

/// Whether `key` can name a blob: letters, digits, `-`, `_` and `.`, not starting with `.`.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Abstract key-value blob storage.
///
/// All methods take `&self`; in-memory implementations use interior mutability since the
/// board is single-threaded.
pub trait BlobStore {
    /// Read the blob stored under `key`. `Ok(None)` when nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob stored under `key`.
    fn set(&self, key: &str, blob: &str) -> Result<()>;
}

impl<B: BlobStore + ?Sized> BlobStore for &B {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, blob: &str) -> Result<()> {
        (**self).set(key, blob)
    }
}
