//! Built-in fallback dataset.
//!
//! Used verbatim on first run and whenever the stored blob cannot be read back as a
//! record list.

use crate::model::{ContentType, Record};
use once_cell::sync::Lazy;

static SEED: Lazy<Vec<Record>> = Lazy::new(|| {
    vec![
        seed_record(
            "1",
            "Launch New Website",
            "12345",
            ContentType::Practitioners,
            "2025-04-15",
            &["website", "branding", "launch"],
            1,
        ),
        seed_record(
            "2",
            "Blog Post on Vue 3 Features",
            "67890",
            ContentType::BlogPost,
            "2025-04-16",
            &["Vue 3", "blog", "features"],
            2,
        ),
        seed_record(
            "3",
            "API Security Best Practices",
            "54321",
            ContentType::Review,
            "2025-04-17",
            &["API", "security", "best practices"],
            1,
        ),
        seed_record(
            "4",
            "Discussion on React vs Vue",
            "98765",
            ContentType::ForumThread,
            "2025-04-18",
            &["React", "Vue", "discussion"],
            3,
        ),
        seed_record(
            "5",
            "Protocol for Database Backups",
            "11223",
            ContentType::Protocol,
            "2025-04-19",
            &["database", "backup", "protocol"],
            2,
        ),
        seed_record(
            "6",
            "Code Review for Authentication Module",
            "44556",
            ContentType::Practitioners,
            "2025-04-20",
            &["code review", "authentication"],
            1,
        ),
        seed_record(
            "7",
            "Building a Component Library with Vue 3",
            "77889",
            ContentType::Practitioners,
            "2025-04-21",
            &["Vue 3", "component library", "guide"],
            2,
        ),
        seed_record(
            "8",
            "Unit Testing with Jest",
            "99000",
            ContentType::Practitioners,
            "2025-04-22",
            &["unit testing", "Jest", "testing"],
            3,
        ),
        seed_record(
            "9",
            "Implementing CI/CD Pipeline",
            "11121",
            ContentType::Protocol,
            "2025-04-23",
            &["CI/CD", "automation", "deployment"],
            2,
        ),
        seed_record(
            "10",
            "Forum Discussion on Agile Practices",
            "22232",
            ContentType::ForumThread,
            "2025-04-24",
            &["Agile", "software development", "discussion"],
            4,
        ),
    ]
});

// Every seed entry shares the same end date.
const SEED_END_DATE: &str = "2025-04-24";

fn seed_record(
    id: &str,
    title: &str,
    reference_id: &str,
    content_type: ContentType,
    start: &str,
    tags: &[&str],
    priority: u32,
) -> Record {
    Record {
        id: id.to_string(),
        title: title.to_string(),
        reference_id: Some(reference_id.to_string()),
        content_type,
        visibility: true,
        start_publish_date: Some(start.to_string()),
        end_publish_date: Some(SEED_END_DATE.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        priority: Some(priority),
        is_new: false,
    }
}

/// A fresh copy of the seed dataset.
pub fn seed_records() -> Vec<Record> {
    SEED.clone()
}
