//! # Command Layer
//!
//! One module per user action. Each `run`-style function takes the [`Board`] (or, for
//! `config` and `init`, the board directory), performs the action and returns a
//! [`CmdResult`]: the records touched or listed plus user-facing messages.
//!
//! Commands never print. Outcomes that the board treats as harmless no-ops (unknown id on
//! save, a drop onto itself, confirming with nothing pending) come back as info messages,
//! not errors.
//!
//! [`Board`]: crate::board::Board

use crate::config::BoardConfig;
use crate::model::Record;

pub mod add;
pub mod config;
pub mod delete;
pub mod init;
pub mod list;
pub mod reorder;
pub mod save;
pub mod show;
pub mod visibility;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    pub config: Option<BoardConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_config(mut self, config: BoardConfig) -> Self {
        self.config = Some(config);
        self
    }
}
