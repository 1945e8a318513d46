//! Data models
//!
//! UI-independent structures for article log entries and paging.

mod log_entry;
mod page;

pub use log_entry::{ArticleLog, DATE_FORMAT, LogEntry, LogEntryType};
pub use page::{DEFAULT_PER_PAGE, PageRange, total_pages};
