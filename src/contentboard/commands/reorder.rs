use crate::board::Board;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ordering::{move_item, reconcile};
use crate::store::BlobStore;

/// Drops card `source_id` onto the slot of `target_id` in the current view and merges the
/// result into the full order with the board's merge strategy.
pub fn run<B: BlobStore>(
    board: &mut Board<B>,
    source_id: &str,
    target_id: &str,
) -> Result<CmdResult> {
    let Some(reordered) = move_item(board.view(), source_id, target_id) else {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "Nothing to move: {} onto {}",
            source_id, target_id
        ))));
    };

    let merged = reconcile(board.records(), &reordered, board.strategy());
    board.commit(merged)?;

    let position = board
        .view()
        .iter()
        .position(|r| r.id == source_id)
        .map(|i| i + 1)
        .unwrap_or_default();
    let moved: Vec<_> = board
        .view()
        .iter()
        .filter(|r| r.id == source_id)
        .cloned()
        .collect();

    Ok(CmdResult::default()
        .with_affected_records(moved)
        .with_listed_records(board.view().to_vec())
        .with_message(CmdMessage::success(format!(
            "Moved record {} to position {}",
            source_id, position
        ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use crate::filter::ViewFilter;
    use crate::model::{ContentType, Record};
    use crate::ordering::MergeStrategy;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::MemBlobStore;

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    /// Full [A, B, C] where A and C are reviews and B is a protocol.
    fn board(strategy: MergeStrategy) -> Board<MemBlobStore> {
        let backend = StoreFixture::new()
            .with_record("A", ContentType::Review, true, &[])
            .with_record("B", ContentType::Protocol, true, &[])
            .with_record("C", ContentType::Review, true, &[])
            .build();
        let config = BoardConfig {
            merge_strategy: strategy,
            ..BoardConfig::default()
        };
        Board::open(backend, &config).unwrap()
    }

    fn stored_ids(board: &Board<MemBlobStore>) -> Vec<String> {
        let blob = board.store().backend().get("contents").unwrap().unwrap();
        let records: Vec<Record> = serde_json::from_str(&blob).unwrap();
        records.into_iter().map(|r| r.id).collect()
    }

    #[test]
    fn literal_drag_in_filtered_view_reconciles_full_order() {
        let mut board = board(MergeStrategy::Literal);
        board.set_filter(ViewFilter::new().with_type(ContentType::Review));
        assert_eq!(ids(board.view()), vec!["A", "C"]);

        run(&mut board, "C", "A").unwrap();

        assert_eq!(ids(board.view()), vec!["C", "A"]);
        assert_eq!(ids(board.records()), vec!["C", "A", "B"]);
        assert_eq!(stored_ids(&board), vec!["C", "A", "B"]);
    }

    #[test]
    fn interpolate_drag_in_filtered_view_reconciles_full_order() {
        let mut board = board(MergeStrategy::Interpolate);
        board.set_filter(ViewFilter::new().with_type(ContentType::Review));

        run(&mut board, "C", "A").unwrap();

        assert_eq!(ids(board.view()), vec!["C", "A"]);
        assert_eq!(ids(board.records()), vec!["C", "B", "A"]);
        assert_eq!(stored_ids(&board), vec!["C", "B", "A"]);
    }

    #[test]
    fn unfiltered_drag_is_a_plain_move() {
        let mut board = board(MergeStrategy::Literal);
        let result = run(&mut board, "A", "C").unwrap();

        assert_eq!(ids(board.records()), vec!["B", "C", "A"]);
        assert_eq!(result.messages[0].content, "Moved record A to position 3");
    }

    #[test]
    fn drop_onto_itself_changes_nothing() {
        let mut board = board(MergeStrategy::Literal);
        let result = run(&mut board, "B", "B").unwrap();

        assert!(result.affected_records.is_empty());
        assert_eq!(ids(board.records()), vec!["A", "B", "C"]);
        assert_eq!(board.store().backend().write_count(), 0);
    }

    #[test]
    fn drop_outside_the_view_changes_nothing() {
        let mut board = board(MergeStrategy::Literal);
        board.set_filter(ViewFilter::new().with_type(ContentType::Review));

        run(&mut board, "B", "A").unwrap();
        run(&mut board, "A", "missing").unwrap();

        assert_eq!(ids(board.records()), vec!["A", "B", "C"]);
        assert_eq!(board.store().backend().write_count(), 0);
    }
}
