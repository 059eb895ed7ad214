use crate::board::Board;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::records;
use crate::store::BlobStore;

/// Flips the visibility of the record with `id`. The "new" marker is left as is.
pub fn toggle<B: BlobStore>(board: &mut Board<B>, id: &str) -> Result<CmdResult> {
    let Some(current) = board.find(id) else {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::info(format!("No record with id {}", id))));
    };

    let mut updated = current.clone();
    updated.visibility = !updated.visibility;
    let next = records::replace(board.records(), id, &updated);
    board.commit(next)?;

    let state = if updated.visibility { "visible" } else { "hidden" };
    Ok(CmdResult::default()
        .with_affected_records(vec![updated])
        .with_message(CmdMessage::success(format!("Record {} is now {}", id, state))))
}
