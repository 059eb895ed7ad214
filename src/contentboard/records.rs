//! # Record Reducers
//!
//! Pure functions over the canonical record sequence. Each takes the current collection
//! and returns the next one; persistence and view recomputation happen in the caller
//! ([`crate::board::Board`]).
//!
//! Unknown ids are silent no-ops everywhere: there is no concurrent mutator that could
//! have removed a record behind the caller's back, so a miss is not worth an error.

use crate::model::Record;

/// Next id: one past the largest numeric id, or `"1"` for an empty board.
///
/// Ids are opaque strings, but new ids are minted as integers. Ids that do not parse as
/// integers are ignored when computing the maximum.
pub fn next_id(records: &[Record]) -> String {
    let max = records
        .iter()
        .filter_map(Record::numeric_id)
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

/// Prepends a blank record flagged as new. Returns the new collection and the record.
pub fn add_new(records: &[Record]) -> (Vec<Record>, Record) {
    let record = Record::blank(next_id(records));
    let mut next = Vec::with_capacity(records.len() + 1);
    next.push(record.clone());
    next.extend_from_slice(records);
    (next, record)
}

/// Substitutes the record with `id`. The substitute always keeps `id`.
pub fn replace(records: &[Record], id: &str, updated: &Record) -> Vec<Record> {
    records
        .iter()
        .map(|record| {
            if record.id == id {
                let mut substitute = updated.clone();
                substitute.id = id.to_string();
                substitute
            } else {
                record.clone()
            }
        })
        .collect()
}

/// Drops the record with `id`, keeping everything else in order.
pub fn remove(records: &[Record], id: &str) -> Vec<Record> {
    records.iter().filter(|r| r.id != id).cloned().collect()
}

pub fn find<'a>(records: &'a [Record], id: &str) -> Option<&'a Record> {
    records.iter().find(|r| r.id == id)
}
