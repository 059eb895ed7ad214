//! # Rendering
//!
//! Turns records and command messages into terminal text. Layout math (widths,
//! truncation, padding) is Unicode-aware; colors come from `colored`, which switches
//! itself off when stdout is not a terminal.

use colored::*;
use contentboard::api::{CmdMessage, MessageLevel};
use contentboard::model::Record;
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 100;
pub const TYPE_WIDTH: usize = 14;
pub const STATE_WIDTH: usize = 8;
pub const NEW_MARKER: &str = "●";

/// One line per record, in view order.
pub fn render_record_list(records: &[Record]) -> String {
    if records.is_empty() {
        return "No records found.\n".to_string();
    }

    let id_width = records.iter().map(|r| r.id.width()).max().unwrap_or(1);
    let mut output = String::new();

    for record in records {
        let marker = if record.is_new { NEW_MARKER } else { " " };
        let id = format!("{:>width$}. ", record.id, width = id_width);

        let label = if record.tags.is_empty() {
            record.display_title().to_string()
        } else {
            format!("{}  #{}", record.display_title(), record.tags.join(" #"))
        };

        let fixed = 2 + id.width() + TYPE_WIDTH + STATE_WIDTH + 2;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let label = truncate_to_width(&label, available);
        let padding = available.saturating_sub(label.width());

        let content_type = format!("{:<width$}", record.content_type.label(), width = TYPE_WIDTH);
        let state = if record.visibility {
            format!("{:>width$}", "visible", width = STATE_WIDTH).green()
        } else {
            format!("{:>width$}", "hidden", width = STATE_WIDTH).dimmed()
        };

        output.push_str(&format!(
            "{} {}{}{}  {}{}\n",
            marker.yellow(),
            id.yellow(),
            label,
            " ".repeat(padding),
            content_type.cyan(),
            state
        ));
    }

    output
}

/// Full field listing for each record.
pub fn render_full_records(records: &[Record]) -> String {
    let mut output = String::new();

    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            output.push_str("\n================================\n\n");
        }
        output.push_str(&format!(
            "{} {}\n",
            record.id.yellow(),
            record.display_title().bold()
        ));
        output.push_str("--------------------------------\n");
        output.push_str(&field("Type", record.content_type.label()));
        output.push_str(&field(
            "Reference",
            record.reference_id.as_deref().unwrap_or("-"),
        ));
        output.push_str(&field(
            "Visibility",
            if record.visibility { "visible" } else { "hidden" },
        ));
        output.push_str(&field(
            "Publish",
            &format!(
                "{} → {}",
                record.start_publish_date.as_deref().unwrap_or("-"),
                record.end_publish_date.as_deref().unwrap_or("-")
            ),
        ));
        let tags = if record.tags.is_empty() {
            "-".to_string()
        } else {
            record.tags.join(", ")
        };
        output.push_str(&field("Tags", &tags));
        let priority = record
            .priority
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&field("Priority", &priority));
        if record.is_new {
            output.push_str(&field("Status", "new (unsaved)"));
        }
    }

    output
}

fn field(name: &str, value: &str) -> String {
    format!("{:<12}{}\n", format!("{}:", name).dimmed(), value)
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let content = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", content)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
