//! Article log entry model
//!
//! Mirrors the JSON returned by the article log endpoint.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Display format for entry timestamps (e.g., "15.01.2025 10:30")
pub const DATE_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Kind of change recorded by a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogEntryType {
    /// Page created
    New,
    /// Title changed
    Title,
    /// Source text edited
    Source,
    /// Page renamed (or moved/deleted)
    Name,
}

impl LogEntryType {
    /// Single-letter flag shown in the history table
    pub fn flag(self) -> char {
        match self {
            Self::New => 'N',
            Self::Title => 'T',
            Self::Source => 'S',
            Self::Name => 'R',
        }
    }

    /// `meta` keys holding the previous and new value, for title and name changes
    pub fn transition_keys(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Title => Some(("prev_title", "title")),
            Self::Name => Some(("prev_name", "name")),
            Self::New | Self::Source => None,
        }
    }
}

/// One recorded change event for an article
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Revision number (starts at 1)
    pub rev_number: u32,
    /// Kind of change
    #[serde(rename = "type")]
    pub entry_type: LogEntryType,
    /// When the change was made, with the server's offset
    pub created_at: DateTime<FixedOffset>,
    /// Free-text comment left by the editor (may be blank)
    #[serde(default)]
    pub comment: String,
    /// Type-dependent details (e.g., `prev_title` / `title`)
    #[serde(default)]
    pub meta: Map<String, Value>,
    /// Author, when the API reports one
    #[serde(default)]
    pub user: Option<String>,
}

impl LogEntry {
    /// Formatted timestamp for display
    pub fn display_date(&self) -> String {
        self.created_at.format(DATE_FORMAT).to_string()
    }

    /// Whether the editor left a non-blank comment
    pub fn has_comment(&self) -> bool {
        !self.comment.trim().is_empty()
    }

    /// String value from `meta`, or "" when absent or not a string
    pub fn meta_str(&self, key: &str) -> &str {
        self.meta.get(key).and_then(Value::as_str).unwrap_or("")
    }
}

/// One page of log entries plus the total number of entries for the article
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArticleLog {
    pub entries: Vec<LogEntry>,
    pub count: u64,
}
