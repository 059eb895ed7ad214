use crate::board::Board;
use crate::commands::CmdResult;
use crate::error::{BoardError, Result};
use crate::store::BlobStore;

/// Looks up records by id. Unlike the mutating commands, an unknown id is an error here.
pub fn run<B: BlobStore, I: AsRef<str>>(board: &Board<B>, ids: &[I]) -> Result<CmdResult> {
    let records = ids
        .iter()
        .map(|id| {
            let id: &str = id.as_ref();
            board
                .find(id)
                .cloned()
                .ok_or_else(|| BoardError::RecordNotFound(id.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_listed_records(records))
}
