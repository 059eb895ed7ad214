//! Owned board state.
//!
//! A [`Board`] bundles everything a session works on: the record store (canonical
//! order + persistence), the active filter, the derived view and the pending delete.
//! Commands take `&mut Board` and never reach for global state.

use crate::config::BoardConfig;
use crate::error::Result;
use crate::filter::{self, ViewFilter};
use crate::model::Record;
use crate::ordering::MergeStrategy;
use crate::records;
use crate::store::{BlobStore, RecordStore};
use log::debug;

pub struct Board<B: BlobStore> {
    store: RecordStore<B>,
    filter: ViewFilter,
    view: Vec<Record>,
    pending_delete: Option<String>,
    strategy: MergeStrategy,
    clear_new_on_save: bool,
}

impl<B: BlobStore> Board<B> {
    /// Loads the records stored under the configured key and derives the unfiltered view.
    pub fn open(backend: B, config: &BoardConfig) -> Result<Self> {
        let store = RecordStore::load(backend, config.storage_key.as_str())?;
        let mut board = Self {
            store,
            filter: ViewFilter::default(),
            view: Vec::new(),
            pending_delete: None,
            strategy: config.merge_strategy,
            clear_new_on_save: config.clear_new_on_save,
        };
        board.refresh();
        debug!(
            "Opened board '{}' with {} records",
            board.store.key(),
            board.records().len()
        );
        Ok(board)
    }

    /// Full record sequence in canonical order.
    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    /// The filtered view as of the last [`Board::refresh`].
    pub fn view(&self) -> &[Record] {
        &self.view
    }

    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: ViewFilter) {
        self.filter = filter;
        self.refresh();
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.refresh();
    }

    pub fn strategy(&self) -> MergeStrategy {
        self.strategy
    }

    pub fn clear_new_on_save(&self) -> bool {
        self.clear_new_on_save
    }

    pub fn find(&self, id: &str) -> Option<&Record> {
        records::find(self.records(), id)
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }

    /// Recomputes the view from the full sequence and the active filter.
    pub fn refresh(&mut self) {
        self.view = filter::apply(self.store.records(), &self.filter);
    }

    /// Replaces the full sequence, writes it out and recomputes the view.
    pub(crate) fn commit(&mut self, records: Vec<Record>) -> Result<bool> {
        self.store.set_records(records);
        let written = self.store.persist()?;
        self.refresh();
        debug!(
            "Committed {} records ({} in view, written: {})",
            self.records().len(),
            self.view.len(),
            written
        );
        Ok(written)
    }

    /// Drops `id` from the stored blob as well as from memory.
    pub(crate) fn commit_removal(&mut self, id: &str) -> Result<()> {
        let remaining = records::remove(self.records(), id);
        self.commit(remaining)?;
        self.store.purge_persisted(id)?;
        Ok(())
    }

    pub(crate) fn set_pending_delete(&mut self, id: Option<String>) {
        self.pending_delete = id;
    }

    pub(crate) fn take_pending_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }
}
