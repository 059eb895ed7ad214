//! Inline-edit boundary.
//!
//! Card edit fields are plain text: tags are typed as one comma separated string and a
//! cleared date field is an empty string. [`RecordDraft`] holds that text form, and is
//! the only place that converts it to and from the typed [`Record`].

use crate::model::{ContentType, Record};

/// Editable text form of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    pub title: String,
    pub reference_id: String,
    pub content_type: ContentType,
    pub visibility: bool,
    pub start_publish_date: String,
    pub end_publish_date: String,
    pub tags: String,
    pub priority: Option<u32>,
}

impl From<&Record> for RecordDraft {
    fn from(record: &Record) -> Self {
        Self {
            title: record.title.clone(),
            reference_id: record.reference_id.clone().unwrap_or_default(),
            content_type: record.content_type,
            visibility: record.visibility,
            start_publish_date: record.start_publish_date.clone().unwrap_or_default(),
            end_publish_date: record.end_publish_date.clone().unwrap_or_default(),
            tags: format_tags(&record.tags),
            priority: record.priority,
        }
    }
}

impl RecordDraft {
    /// Builds the record this draft describes, on top of `base` (keeps id and `is_new`).
    pub fn to_record(&self, base: &Record) -> Record {
        Record {
            id: base.id.clone(),
            title: self.title.clone(),
            reference_id: non_blank(&self.reference_id),
            content_type: self.content_type,
            visibility: self.visibility,
            start_publish_date: non_blank(&self.start_publish_date),
            end_publish_date: non_blank(&self.end_publish_date),
            tags: parse_tags(&self.tags),
            priority: self.priority,
            is_new: base.is_new,
        }
    }
}

/// Splits a comma separated tag string, trimming and dropping empty entries.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

pub fn format_tags(tags: &[String]) -> String {
    tags.join(", ")
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_records;

    #[test]
    fn parse_tags_trims_and_drops_empties() {
        assert_eq!(
            parse_tags(" Vue 3, ,blog ,, features "),
            vec!["Vue 3", "blog", "features"]
        );
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ").is_empty());
    }

    #[test]
    fn draft_shows_tags_as_text() {
        let record = &seed_records()[0];
        let draft = RecordDraft::from(record);
        assert_eq!(draft.tags, "website, branding, launch");
        assert_eq!(draft.reference_id, "12345");
    }

    #[test]
    fn unchanged_draft_reproduces_the_record() {
        for record in seed_records() {
            let draft = RecordDraft::from(&record);
            assert_eq!(draft.to_record(&record), record);
        }
    }

    #[test]
    fn blank_text_fields_become_absent() {
        let record = Record::blank("11");
        let mut draft = RecordDraft::from(&record);
        draft.title = "Spring launch".into();
        draft.start_publish_date = "  ".into();
        draft.reference_id = String::new();
        draft.tags = "launch, spring".into();

        let edited = draft.to_record(&record);
        assert_eq!(edited.id, "11");
        assert_eq!(edited.title, "Spring launch");
        assert_eq!(edited.start_publish_date, None);
        assert_eq!(edited.reference_id, None);
        assert_eq!(edited.tags, vec!["launch", "spring"]);
        assert!(edited.is_new);
    }
}
