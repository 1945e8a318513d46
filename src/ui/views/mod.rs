//! View components
//!
//! Each view represents a screen in the application.

mod history;

pub use history::{HistoryAction, HistoryView, PageRequest, comment_line};
