use crate::board::Board;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::records;
use crate::store::BlobStore;

/// Prepends a blank record flagged as new.
///
/// The view is recomputed afterwards, so under an active filter the new card only shows
/// up if a blank record matches it.
pub fn run<B: BlobStore>(board: &mut Board<B>) -> Result<CmdResult> {
    let (next, record) = records::add_new(board.records());
    board.commit(next)?;

    let mut result = CmdResult::default();
    if board.view().iter().all(|r| r.id != record.id) {
        result.add_message(CmdMessage::info(format!(
            "Record {} is hidden by the active filter",
            record.id
        )));
    }
    result.add_message(CmdMessage::success(format!("Record {} added", record.id)));
    Ok(result.with_affected_records(vec![record]))
}
