//! View filtering.
//!
//! A [`ViewFilter`] holds the three predicates of the board toolbar: content type,
//! visibility and a tag substring. [`apply`] derives the filtered view from the full
//! sequence. The output is always a subsequence of the input in the same relative order.

use crate::model::{ContentType, Record};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityFilter {
    Visible,
    Hidden,
}

impl VisibilityFilter {
    fn matches(&self, visibility: bool) -> bool {
        match self {
            VisibilityFilter::Visible => visibility,
            VisibilityFilter::Hidden => !visibility,
        }
    }
}

impl fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisibilityFilter::Visible => f.write_str("visible"),
            VisibilityFilter::Hidden => f.write_str("hidden"),
        }
    }
}

impl FromStr for VisibilityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visible" => Ok(VisibilityFilter::Visible),
            "hidden" => Ok(VisibilityFilter::Hidden),
            other => Err(format!(
                "Unknown visibility '{}' (expected visible or hidden)",
                other
            )),
        }
    }
}

/// Active filter predicates. Unset predicates pass every record; set ones are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewFilter {
    pub content_type: Option<ContentType>,
    pub visibility: Option<VisibilityFilter>,
    /// Case-insensitive substring matched against each tag. An empty string is unset.
    pub tag: Option<String>,
}

impl ViewFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    pub fn with_visibility(mut self, visibility: VisibilityFilter) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    fn tag_needle(&self) -> Option<String> {
        self.tag
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }

    /// True when no predicate is active (nothing to clear).
    pub fn is_empty(&self) -> bool {
        self.content_type.is_none() && self.visibility.is_none() && self.tag_needle().is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, record: &Record) -> bool {
        let matches_type = self
            .content_type
            .map_or(true, |t| record.content_type == t);
        let matches_visibility = self
            .visibility
            .map_or(true, |v| v.matches(record.visibility));
        let matches_tag = match self.tag_needle() {
            None => true,
            Some(needle) => record
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle)),
        };

        matches_type && matches_visibility && matches_tag
    }
}

/// Derives the filtered view, preserving the relative order of `records`.
pub fn apply(records: &[Record], filter: &ViewFilter) -> Vec<Record> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_records;

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    fn is_subsequence(sub: &[Record], full: &[Record]) -> bool {
        let mut rest = full.iter();
        sub.iter().all(|s| rest.any(|f| f.id == s.id))
    }

    fn board() -> Vec<Record> {
        let mut records = seed_records();
        records[1].visibility = false;
        records[6].visibility = false;
        records[8].tags.clear();
        records
    }

    #[test]
    fn empty_filter_passes_everything() {
        let records = board();
        let filter = ViewFilter::new();
        assert!(filter.is_empty());
        assert_eq!(apply(&records, &filter), records);
    }

    #[test]
    fn filters_by_exact_type() {
        let view = apply(&board(), &ViewFilter::new().with_type(ContentType::Practitioners));
        assert_eq!(ids(&view), vec!["1", "6", "7", "8"]);
    }

    #[test]
    fn filters_by_visibility() {
        let records = board();
        let hidden = apply(&records, &ViewFilter::new().with_visibility(VisibilityFilter::Hidden));
        assert_eq!(ids(&hidden), vec!["2", "7"]);

        let visible =
            apply(&records, &ViewFilter::new().with_visibility(VisibilityFilter::Visible));
        assert_eq!(visible.len(), 8);
        assert!(visible.iter().all(|r| r.visibility));
    }

    #[test]
    fn tag_match_is_case_insensitive_substring() {
        let view = apply(&board(), &ViewFilter::new().with_tag("VUE"));
        assert_eq!(ids(&view), vec!["2", "4", "7"]);
    }

    #[test]
    fn untagged_records_never_match_a_tag_filter() {
        let view = apply(&board(), &ViewFilter::new().with_tag("i"));
        assert!(!ids(&view).contains(&"9"));
    }

    #[test]
    fn empty_tag_string_counts_as_unset() {
        let filter = ViewFilter::new().with_tag("");
        assert!(filter.is_empty());
        assert_eq!(apply(&board(), &filter).len(), 10);
    }

    #[test]
    fn predicates_are_anded() {
        let filter = ViewFilter::new()
            .with_type(ContentType::Practitioners)
            .with_visibility(VisibilityFilter::Visible)
            .with_tag("vue");
        let view = apply(&board(), &filter);
        assert!(view.is_empty());

        let filter = ViewFilter::new()
            .with_type(ContentType::Practitioners)
            .with_tag("vue");
        assert_eq!(ids(&apply(&board(), &filter)), vec!["7"]);
    }

    #[test]
    fn every_combination_yields_an_ordered_subsequence_of_matches() {
        let records = board();
        let types = std::iter::once(None).chain(ContentType::ALL.into_iter().map(Some));
        for content_type in types {
            for visibility in [None, Some(VisibilityFilter::Visible), Some(VisibilityFilter::Hidden)] {
                for tag in [None, Some("vue"), Some("DISCUSSION"), Some("zzz")] {
                    let filter = ViewFilter {
                        content_type,
                        visibility,
                        tag: tag.map(String::from),
                    };
                    let view = apply(&records, &filter);
                    assert!(is_subsequence(&view, &records), "{:?}", filter);
                    assert!(view.iter().all(|r| filter.matches(r)), "{:?}", filter);
                    let expected = records.iter().filter(|r| filter.matches(r)).count();
                    assert_eq!(view.len(), expected, "{:?}", filter);
                }
            }
        }
    }

    #[test]
    fn clear_resets_all_predicates() {
        let mut filter = ViewFilter::new()
            .with_type(ContentType::Review)
            .with_tag("api");
        assert!(!filter.is_empty());
        filter.clear();
        assert!(filter.is_empty());
    }

    #[test]
    fn visibility_parses_case_insensitively() {
        assert_eq!("Hidden".parse::<VisibilityFilter>(), Ok(VisibilityFilter::Hidden));
        assert!("gone".parse::<VisibilityFilter>().is_err());
    }
}
