//! Common test utilities for integration and UI tests.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use ratatui::buffer::Buffer;

use article_history::api::{ApiError, ArticleLogSource};
use article_history::model::{ArticleLog, LogEntry, LogEntryType, PageRange};

/// Build an entry with a fixed timestamp ("15.01.2025 10:30" when displayed)
pub fn make_entry(rev_number: u32, entry_type: LogEntryType, comment: &str) -> LogEntry {
    LogEntry {
        rev_number,
        entry_type,
        created_at: "2025-01-15T10:30:00+03:00".parse().unwrap(),
        comment: comment.to_string(),
        meta: Default::default(),
        user: None,
    }
}

/// A page of source edits numbered `first..=last`, newest first
pub fn make_log(count: u64, first: u32, last: u32) -> ArticleLog {
    ArticleLog {
        entries: (first..=last)
            .rev()
            .map(|rev| make_entry(rev, LogEntryType::Source, &format!("edit {rev}")))
            .collect(),
        count,
    }
}

/// Server failure with an optional `error` message
pub fn server_error(message: Option<&str>) -> ApiError {
    ApiError::Server {
        status: 500,
        message: message.map(str::to_string),
    }
}

/// Rows of a buffer as plain strings
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect()
        })
        .collect()
}

/// Log source replaying canned responses and recording requests
#[derive(Default)]
pub struct FakeSource {
    responses: Mutex<VecDeque<Result<ArticleLog, ApiError>>>,
    requests: Mutex<Vec<(String, PageRange)>>,
}

impl FakeSource {
    pub fn new(responses: Vec<Result<ArticleLog, ApiError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<(String, PageRange)> {
        self.requests.lock().unwrap().clone()
    }
}

impl ArticleLogSource for FakeSource {
    fn fetch_article_log(&self, page_id: &str, range: PageRange) -> Result<ArticleLog, ApiError> {
        self.requests
            .lock()
            .unwrap()
            .push((page_id.to_string(), range));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(server_error(Some("no canned response"))))
    }
}
