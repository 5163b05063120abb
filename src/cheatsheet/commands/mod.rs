//! # Command Layer
//!
//! One module per user operation. Each `run` loads the target list through a
//! [`SheetStore`](crate::store::SheetStore), acts on the
//! [`CheatSheet`](crate::sheet::CheatSheet), saves it back if it changed, and
//! reports what happened in a [`CmdResult`]. Nothing here prints or prompts.

use crate::model::{Entry, Tags};
use std::path::PathBuf;

pub mod add;
pub mod get;
pub mod info;
pub mod lists;
pub mod remove;
pub mod show;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
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
}

/// Counts and vocabulary of one list, as reported by `info`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetSummary {
    pub entry_count: usize,
    pub tags: Tags,
    pub primary_counts: Vec<(String, usize)>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_entries: Vec<Entry>,
    pub listed_entries: Vec<Entry>,
    pub list_names: Vec<String>,
    pub summary: Option<SheetSummary>,
    pub saved_to: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_entries(mut self, entries: Vec<Entry>) -> Self {
        self.affected_entries = entries;
        self
    }

    pub fn with_listed_entries(mut self, entries: Vec<Entry>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_list_names(mut self, names: Vec<String>) -> Self {
        self.list_names = names;
        self
    }

    pub fn with_summary(mut self, summary: SheetSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_saved_to(mut self, path: PathBuf) -> Self {
        self.saved_to = Some(path);
        self
    }
}
