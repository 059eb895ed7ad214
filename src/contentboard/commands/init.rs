use crate::board::Board;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::BoardConfig;
use crate::error::Result;
use crate::store::fs::FsBlobStore;
use std::fs;
use std::path::Path;

/// Creates the board directory with a default config, and seeds the records if none are
/// stored yet. Existing config and records are left alone.
pub fn run(dir: &Path) -> Result<CmdResult> {
    fs::create_dir_all(dir)?;

    let config = BoardConfig::load(dir)?;
    if !dir.join("config.json").exists() {
        config.save(dir)?;
    }

    let board = Board::open(FsBlobStore::new(dir), &config)?;

    let mut result = CmdResult::default().with_config(config);
    result.add_message(CmdMessage::success(format!(
        "Initialized content board at {} ({} records)",
        dir.display(),
        board.records().len()
    )));
    Ok(result)
}
