//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all board operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`Board`] for the session
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or prompts
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over BlobStore
//!
//! `BoardApi<S: BlobStore>` is generic over the storage backend:
//! - Production: `BoardApi<FsBlobStore>`
//! - Testing: `BoardApi<MemBlobStore>`
//!
//! `config` and `init` work on the board directory before any board is opened, so they
//! are free functions rather than methods.

use crate::board::Board;
use crate::commands;
use crate::config::BoardConfig;
use crate::draft::RecordDraft;
use crate::error::Result;
use crate::filter::ViewFilter;
use crate::store::BlobStore;
use std::path::Path;

/// The main API facade for board operations.
pub struct BoardApi<S: BlobStore> {
    board: Board<S>,
}

impl<S: BlobStore> BoardApi<S> {
    /// Opens the board stored in `store`, seeding it on first use.
    pub fn open(store: S, config: &BoardConfig) -> Result<Self> {
        Ok(Self {
            board: Board::open(store, config)?,
        })
    }

    pub fn board(&self) -> &Board<S> {
        &self.board
    }

    pub fn list(&mut self, filter: ViewFilter) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.board, filter)
    }

    pub fn show<I: AsRef<str>>(&self, ids: &[I]) -> Result<commands::CmdResult> {
        commands::show::run(&self.board, ids)
    }

    pub fn add(&mut self) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.board)
    }

    pub fn save(&mut self, id: &str, draft: &RecordDraft) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.board, id, draft)
    }

    pub fn toggle_visibility(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::visibility::toggle(&mut self.board, id)
    }

    /// Moves `source_id` onto `target_id` within the view selected by `filter`.
    pub fn move_record(
        &mut self,
        filter: ViewFilter,
        source_id: &str,
        target_id: &str,
    ) -> Result<commands::CmdResult> {
        self.board.set_filter(filter);
        commands::reorder::run(&mut self.board, source_id, target_id)
    }

    pub fn request_delete(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::request(&mut self.board, id)
    }

    pub fn confirm_delete(&mut self) -> Result<commands::CmdResult> {
        commands::delete::confirm(&mut self.board)
    }

    pub fn cancel_delete(&mut self) -> Result<commands::CmdResult> {
        commands::delete::cancel(&mut self.board)
    }
}

pub fn config(dir: &Path, action: ConfigAction) -> Result<commands::CmdResult> {
    commands::config::run(dir, action)
}

pub fn init(dir: &Path) -> Result<commands::CmdResult> {
    commands::init::run(dir)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
