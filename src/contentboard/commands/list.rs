use crate::board::Board;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::ViewFilter;
use crate::store::BlobStore;

/// Applies `filter` (no predicates clears it) and lists the resulting view.
pub fn run<B: BlobStore>(board: &mut Board<B>, filter: ViewFilter) -> Result<CmdResult> {
    if filter.is_empty() {
        board.clear_filter();
    } else {
        board.set_filter(filter);
    }
    Ok(CmdResult::default().with_listed_records(board.view().to_vec()))
}
