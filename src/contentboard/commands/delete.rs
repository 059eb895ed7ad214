//! Two-phase delete: a request opens the confirmation, confirm or cancel closes it.

use crate::board::Board;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BlobStore;

/// Marks `id` as pending deletion. Nothing is removed yet.
pub fn request<B: BlobStore>(board: &mut Board<B>, id: &str) -> Result<CmdResult> {
    let Some(record) = board.find(id).cloned() else {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::info(format!("No record with id {}", id))));
    };

    board.set_pending_delete(Some(id.to_string()));
    Ok(CmdResult::default()
        .with_message(CmdMessage::warning(format!(
            "Delete record {} ({})? This cannot be undone.",
            id,
            record.display_title()
        )))
        .with_affected_records(vec![record]))
}

/// Deletes the pending record from memory and from storage, then closes the prompt.
pub fn confirm<B: BlobStore>(board: &mut Board<B>) -> Result<CmdResult> {
    let Some(id) = board.take_pending_delete() else {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No delete pending")));
    };

    let removed: Vec<_> = board.find(&id).cloned().into_iter().collect();
    board.commit_removal(&id)?;

    Ok(CmdResult::default()
        .with_affected_records(removed)
        .with_message(CmdMessage::success(format!("Record {} deleted", id))))
}

/// Closes the prompt without deleting anything.
pub fn cancel<B: BlobStore>(board: &mut Board<B>) -> Result<CmdResult> {
    let message = match board.take_pending_delete() {
        Some(id) => CmdMessage::info(format!("Kept record {}", id)),
        None => CmdMessage::info("No delete pending"),
    };
    Ok(CmdResult::default().with_message(message))
}
