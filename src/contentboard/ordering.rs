//! # Reconciled Ordering
//!
//! Cards are dragged inside the *filtered view*, but the order that gets persisted is the
//! order of the *full* record sequence. This module moves a card within the view and then
//! merges the new view order back into the full sequence.
//!
//! ## Merge contract
//!
//! Given the full sequence and the reordered view, [`reconcile`] returns a sequence that:
//!
//! 1. holds exactly the records of the full sequence,
//! 2. orders the records present in the view (the *included* ones) as the view does,
//! 3. keeps the records absent from the view (the *excluded* ones) in their original
//!    relative order.
//!
//! Where the excluded records land between included ones depends on the
//! [`MergeStrategy`].
//!
//! ## Literal
//!
//! The full sequence is sorted with the comparator "if both records are ranked (present
//! in the view), compare their view positions, otherwise they are equal". That comparator
//! is not a total order, which the standard library sorts are allowed to reject by
//! panicking, so the sort is pinned to a stable selection sort: repeatedly take the
//! first minimum of the remaining records.
//!
//! The outcome: an excluded record is emitted as soon as every included record that
//! originally preceded it has been emitted. When the view is reordered, an excluded record
//! can therefore end up next to a different included neighbor than before.
//!
//! ```text
//! full [A, X, B, Y]   view [A, B] -> [B, A]   (X, Y excluded)
//! literal      -> [B, A, X, Y]
//! interpolate  -> [B, X, A, Y]
//! ```
//!
//! ## Interpolate
//!
//! Excluded records keep their slots in the full sequence. The slots that held included
//! records are refilled, left to right, with the included records in view order.
//!
//! Both strategies are exact when the view holds every record.

use crate::model::Record;
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    #[default]
    Literal,
    Interpolate,
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeStrategy::Literal => f.write_str("literal"),
            MergeStrategy::Interpolate => f.write_str("interpolate"),
        }
    }
}

impl FromStr for MergeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "literal" => Ok(MergeStrategy::Literal),
            "interpolate" => Ok(MergeStrategy::Interpolate),
            other => Err(format!(
                "Unknown merge strategy '{}' (expected literal or interpolate)",
                other
            )),
        }
    }
}

/// Moves the card `source_id` to the slot of `target_id` within `view`.
///
/// Returns `None` when the drop is rejected: dropping a card onto itself, or either id
/// missing from the view.
pub fn move_item(view: &[Record], source_id: &str, target_id: &str) -> Option<Vec<Record>> {
    if source_id == target_id {
        debug!("drop rejected: {} dropped onto itself", source_id);
        return None;
    }

    let Some(from) = view.iter().position(|r| r.id == source_id) else {
        debug!("drop rejected: source {} not in view", source_id);
        return None;
    };
    let Some(to) = view.iter().position(|r| r.id == target_id) else {
        debug!("drop rejected: target {} not in view", target_id);
        return None;
    };

    let mut moved = view.to_vec();
    let item = moved.remove(from);
    moved.insert(to, item);
    Some(moved)
}

/// Merges the order of `reordered_view` back into `full`.
pub fn reconcile(
    full: &[Record],
    reordered_view: &[Record],
    strategy: MergeStrategy,
) -> Vec<Record> {
    let ranks = rank_map(reordered_view);
    match strategy {
        MergeStrategy::Literal => {
            stable_selection_sort_by(full.to_vec(), |a, b| compare_ranked(a, b, &ranks))
        }
        MergeStrategy::Interpolate => interpolate(full, reordered_view, &ranks),
    }
}

fn rank_map(view: &[Record]) -> HashMap<&str, usize> {
    let mut ranks = HashMap::with_capacity(view.len());
    for (rank, record) in view.iter().enumerate() {
        ranks.entry(record.id.as_str()).or_insert(rank);
    }
    ranks
}

fn compare_ranked(a: &Record, b: &Record, ranks: &HashMap<&str, usize>) -> Ordering {
    match (ranks.get(a.id.as_str()), ranks.get(b.id.as_str())) {
        (Some(rank_a), Some(rank_b)) => rank_a.cmp(rank_b),
        _ => Ordering::Equal,
    }
}

/// Stable for any comparator: among equal minimums the earliest one wins.
fn stable_selection_sort_by<T, F>(items: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut remaining = items;
    let mut sorted = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let mut min = 0;
        for i in 1..remaining.len() {
            if compare(&remaining[i], &remaining[min]) == Ordering::Less {
                min = i;
            }
        }
        sorted.push(remaining.remove(min));
    }

    sorted
}

fn interpolate(
    full: &[Record],
    reordered_view: &[Record],
    ranks: &HashMap<&str, usize>,
) -> Vec<Record> {
    let by_id: HashMap<&str, &Record> = full
        .iter()
        .filter(|r| ranks.contains_key(r.id.as_str()))
        .map(|r| (r.id.as_str(), r))
        .collect();
    // Ids that are not part of the full sequence, or repeat, are skipped.
    let mut seen = HashSet::with_capacity(by_id.len());
    let mut refill = reordered_view
        .iter()
        .filter_map(|viewed| by_id.get(viewed.id.as_str()).copied())
        .filter(|record| seen.insert(record.id.as_str()));

    full.iter()
        .map(|record| {
            if ranks.contains_key(record.id.as_str()) {
                refill.next().unwrap_or(record).clone()
            } else {
                record.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{apply, ViewFilter};
    use crate::model::ContentType;
    use crate::seed::seed_records;

    fn record(id: &str, content_type: ContentType, visibility: bool, priority: u32) -> Record {
        let mut r = Record::blank(id);
        r.is_new = false;
        r.content_type = content_type;
        r.visibility = visibility;
        r.priority = Some(priority);
        r
    }

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    fn by_ids(full: &[Record], wanted: &[&str]) -> Vec<Record> {
        wanted
            .iter()
            .map(|id| full.iter().find(|r| r.id == *id).unwrap().clone())
            .collect()
    }

    /// [A(prio 1, X, visible), B(prio 2, Y, hidden), C(prio 1, X, visible)]
    fn abc() -> Vec<Record> {
        vec![
            record("A", ContentType::Practitioners, true, 1),
            record("B", ContentType::BlogPost, false, 2),
            record("C", ContentType::Practitioners, true, 1),
        ]
    }

    #[test]
    fn move_item_places_source_at_target_slot() {
        let seed = seed_records();
        let moved = move_item(&seed[..4], "4", "2").unwrap();
        assert_eq!(ids(&moved), vec!["1", "4", "2", "3"]);

        let moved = move_item(&seed[..4], "1", "3").unwrap();
        assert_eq!(ids(&moved), vec!["2", "3", "1", "4"]);
    }

    #[test]
    fn move_item_rejects_drop_onto_itself() {
        let seed = seed_records();
        assert!(move_item(&seed, "3", "3").is_none());
    }

    #[test]
    fn move_item_rejects_unknown_ids() {
        let seed = seed_records();
        assert!(move_item(&seed, "99", "3").is_none());
        assert!(move_item(&seed, "3", "99").is_none());
    }

    #[test]
    fn literal_merge_of_filtered_drag_scenario() {
        let full = abc();
        let view = apply(&full, &ViewFilter::new().with_type(ContentType::Practitioners));
        assert_eq!(ids(&view), vec!["A", "C"]);

        let dragged = move_item(&view, "C", "A").unwrap();
        assert_eq!(ids(&dragged), vec!["C", "A"]);

        let merged = reconcile(&full, &dragged, MergeStrategy::Literal);
        assert_eq!(ids(&merged), vec!["C", "A", "B"]);
    }

    #[test]
    fn interpolated_merge_of_filtered_drag_scenario() {
        let full = abc();
        let view = apply(&full, &ViewFilter::new().with_type(ContentType::Practitioners));
        let dragged = move_item(&view, "C", "A").unwrap();

        let merged = reconcile(&full, &dragged, MergeStrategy::Interpolate);
        assert_eq!(ids(&merged), vec!["C", "B", "A"]);
    }

    /// [A(review), X(protocol), B(review), Y(protocol)], reviews dragged to [B, A].
    fn axby() -> (Vec<Record>, Vec<Record>) {
        let full = vec![
            record("A", ContentType::Review, true, 1),
            record("X", ContentType::Protocol, true, 1),
            record("B", ContentType::Review, true, 1),
            record("Y", ContentType::Protocol, true, 1),
        ];
        let dragged = by_ids(&full, &["B", "A"]);
        (full, dragged)
    }

    #[test]
    fn literal_merge_can_detach_excluded_record_from_its_neighbor() {
        let (full, dragged) = axby();
        let merged = reconcile(&full, &dragged, MergeStrategy::Literal);
        assert_eq!(ids(&merged), vec!["B", "A", "X", "Y"]);
    }

    #[test]
    fn interpolated_merge_keeps_excluded_records_in_their_slots() {
        let (full, dragged) = axby();
        let merged = reconcile(&full, &dragged, MergeStrategy::Interpolate);
        assert_eq!(ids(&merged), vec!["B", "X", "A", "Y"]);
    }

    #[test]
    fn interpolated_merge_never_swaps_excluded_records() {
        let full = vec![
            record("A", ContentType::Review, true, 1),
            record("X", ContentType::Protocol, true, 1),
            record("B", ContentType::Review, true, 1),
            record("Y", ContentType::Protocol, true, 1),
            record("C", ContentType::Review, true, 1),
        ];
        let dragged = by_ids(&full, &["C", "B", "A"]);

        let merged = reconcile(&full, &dragged, MergeStrategy::Interpolate);
        assert_eq!(ids(&merged), vec!["C", "X", "B", "Y", "A"]);
    }

    #[test]
    fn leading_excluded_records_stay_at_the_head() {
        let full = vec![
            record("X", ContentType::Protocol, true, 1),
            record("A", ContentType::Review, true, 1),
            record("B", ContentType::Review, true, 1),
        ];
        let dragged = by_ids(&full, &["B", "A"]);

        for strategy in [MergeStrategy::Literal, MergeStrategy::Interpolate] {
            let merged = reconcile(&full, &dragged, strategy);
            assert_eq!(ids(&merged), vec!["X", "B", "A"], "{}", strategy);
        }
    }

    #[test]
    fn unfiltered_merge_reproduces_the_drag_exactly() {
        let full = seed_records();
        for strategy in [MergeStrategy::Literal, MergeStrategy::Interpolate] {
            for source in &full {
                for target in &full {
                    let Some(dragged) = move_item(&full, &source.id, &target.id) else {
                        continue;
                    };
                    let merged = reconcile(&full, &dragged, strategy);
                    assert_eq!(merged, dragged, "{} {}->{}", strategy, source.id, target.id);
                }
            }
        }
    }

    #[test]
    fn filtered_merge_keeps_the_record_set_and_both_relative_orders() {
        let mut full = seed_records();
        full[3].visibility = false;
        full[6].visibility = false;
        let filter = ViewFilter::new()
            .with_visibility(crate::filter::VisibilityFilter::Visible)
            .with_tag("e");
        let view = apply(&full, &filter);
        let excluded: Vec<_> = full.iter().filter(|r| !filter.matches(r)).collect();
        assert!(!excluded.is_empty());

        for strategy in [MergeStrategy::Literal, MergeStrategy::Interpolate] {
            for source in &view {
                for target in &view {
                    let Some(dragged) = move_item(&view, &source.id, &target.id) else {
                        continue;
                    };
                    let merged = reconcile(&full, &dragged, strategy);

                    let mut merged_ids = ids(&merged);
                    let mut full_ids = ids(&full);
                    merged_ids.sort_unstable();
                    full_ids.sort_unstable();
                    assert_eq!(merged_ids, full_ids);

                    let included: Vec<_> = merged
                        .iter()
                        .filter(|r| dragged.iter().any(|d| d.id == r.id))
                        .map(|r| r.id.as_str())
                        .collect();
                    assert_eq!(included, ids(&dragged), "{}", strategy);

                    let merged_excluded: Vec<_> = merged
                        .iter()
                        .filter(|r| !filter.matches(r))
                        .map(|r| r.id.as_str())
                        .collect();
                    let original_excluded: Vec<_> =
                        excluded.iter().map(|r| r.id.as_str()).collect();
                    assert_eq!(merged_excluded, original_excluded, "{}", strategy);
                }
            }
        }
    }

    #[test]
    fn merge_strategy_round_trips_through_text() {
        assert_eq!("Interpolate".parse::<MergeStrategy>(), Ok(MergeStrategy::Interpolate));
        assert_eq!(MergeStrategy::default().to_string(), "literal");
        assert!("shuffle".parse::<MergeStrategy>().is_err());
    }
}
