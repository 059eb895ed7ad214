use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of content categories a record can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    Practitioners,
    BlogPost,
    Review,
    ForumThread,
    Protocol,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::Practitioners,
        ContentType::BlogPost,
        ContentType::Review,
        ContentType::ForumThread,
        ContentType::Protocol,
    ];

    /// Wire name as stored in the blob (e.g. `BLOG_POST`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Practitioners => "PRACTITIONERS",
            ContentType::BlogPost => "BLOG_POST",
            ContentType::Review => "REVIEW",
            ContentType::ForumThread => "FORUM_THREAD",
            ContentType::Protocol => "PROTOCOL",
        }
    }

    /// Human label (e.g. `Blog Post`).
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Practitioners => "Practitioners",
            ContentType::BlogPost => "Blog Post",
            ContentType::Review => "Review",
            ContentType::ForumThread => "Forum Thread",
            ContentType::Protocol => "Protocol",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContentType {
    type Err = String;

    /// Accepts `BLOG_POST`, `blog-post` and `Blog Post` alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();

        ContentType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| {
                let known: Vec<_> = ContentType::ALL.iter().map(|t| t.as_str()).collect();
                format!("Unknown content type '{}' (expected one of {})", s, known.join(", "))
            })
    }
}

/// A single manageable content item.
///
/// Field names follow the camelCase layout of the persisted blob so boards written by
/// other clients load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub visibility: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_publish_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_publish_date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(default)]
    pub is_new: bool,
}

impl Record {
    /// A freshly created, unsaved record.
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            reference_id: None,
            content_type: ContentType::Practitioners,
            visibility: true,
            start_publish_date: None,
            end_publish_date: None,
            tags: Vec::new(),
            priority: Some(1),
            is_new: true,
        }
    }

    /// The title, or the content type label when no title was given.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            self.content_type.label()
        } else {
            &self.title
        }
    }

    pub fn numeric_id(&self) -> Option<u64> {
        self.id.parse().ok()
    }
}
