use crate::board::Board;
use crate::commands::{CmdMessage, CmdResult};
use crate::draft::RecordDraft;
use crate::error::Result;
use crate::records;
use crate::store::BlobStore;

/// Applies an edited draft to the record with `id`.
///
/// Saving clears the "new" marker unless the board is configured otherwise. An unknown id
/// changes nothing.
pub fn run<B: BlobStore>(board: &mut Board<B>, id: &str, draft: &RecordDraft) -> Result<CmdResult> {
    let Some(base) = board.find(id) else {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::info(format!("No record with id {}, nothing saved", id))));
    };

    let mut updated = draft.to_record(base);
    if board.clear_new_on_save() {
        updated.is_new = false;
    }

    let next = records::replace(board.records(), id, &updated);
    board.commit(next)?;

    Ok(CmdResult::default()
        .with_affected_records(vec![updated.clone()])
        .with_message(CmdMessage::success(format!(
            "Record {} saved: {}",
            id,
            updated.display_title()
        ))))
}
