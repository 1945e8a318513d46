//! History View: one page of an article's revision log in a modal table
//!
//! The view is a pure state machine. It never performs I/O itself: starting a
//! fetch returns a [`PageRequest`] that the caller runs, and the outcome is fed
//! back through [`HistoryView::finish_load`].

mod input;
mod render;

use std::cell::Cell;

pub use render::comment_line;

use crate::api::ApiError;
use crate::locale::Locale;
use crate::model::{self, ArticleLog, LogEntry, PageRange};
use crate::ui::navigation;

/// A page fetch the caller must perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Article identifier
    pub page_id: String,
    /// 1-based page number being loaded
    pub page: u32,
    /// Offset range for the API
    pub range: PageRange,
}

/// Action returned by the History View after handling input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryAction {
    /// No action needed
    None,
    /// Close the history modal
    Close,
    /// Fetch a page
    Load(PageRequest),
}

/// History View state
#[derive(Debug)]
pub struct HistoryView {
    page_id: String,
    locale: Locale,
    per_page: u32,
    /// A fetch is in flight
    pub(super) loading: bool,
    /// Entries of the current page (None until the first successful load)
    pub(super) entries: Option<Vec<LogEntry>>,
    /// Total entries reported by the API
    pub(super) total_count: u64,
    /// Page whose entries are shown
    pub(super) current_page: u32,
    /// Page being loaded
    pub(super) pending_page: Option<u32>,
    /// Error shown in the error dialog
    pub(super) error: Option<String>,
    /// Dismissing the error closes the view
    pub(super) fatal_error: bool,
    /// Selected row index
    pub(super) selected: usize,
    /// First visible row
    pub(super) scroll_offset: usize,
    /// Spinner animation counter
    pub(super) spinner_tick: usize,
    /// Table rows visible in the last render (updated during render)
    pub(super) visible_rows: Cell<usize>,
}

impl HistoryView {
    /// Create a view for `page_id` with `per_page` entries per page
    pub fn new(page_id: impl Into<String>, per_page: u32, locale: Locale) -> Self {
        Self {
            page_id: page_id.into(),
            locale,
            per_page: per_page.max(1),
            loading: false,
            entries: None,
            total_count: 0,
            current_page: 1,
            pending_page: None,
            error: None,
            fatal_error: false,
            selected: 0,
            scroll_offset: 0,
            spinner_tick: 0,
            visible_rows: Cell::new(0),
        }
    }

    /// Start loading `page`; the caller must run the returned request
    pub fn load_page(&mut self, page: u32) -> PageRequest {
        let page = page.max(1);
        self.loading = true;
        self.error = None;
        self.pending_page = Some(page);

        PageRequest {
            page_id: self.page_id.clone(),
            page,
            range: PageRange::for_page(page, self.per_page),
        }
    }

    /// Apply the outcome of the fetch started by [`Self::load_page`]
    pub fn finish_load(&mut self, result: Result<ArticleLog, ApiError>) {
        self.loading = false;
        let page = self.pending_page.take().unwrap_or(self.current_page);

        match result {
            Ok(log) => {
                tracing::info!(
                    page_id = %self.page_id,
                    page,
                    entries = log.entries.len(),
                    total = log.count,
                    "article log page loaded"
                );
                self.entries = Some(log.entries);
                self.total_count = log.count;
                self.current_page = page;
                self.selected = 0;
                self.scroll_offset = 0;
            }
            Err(err) => {
                self.fatal_error = self.entries.is_none();
                tracing::warn!(
                    page_id = %self.page_id,
                    page,
                    fatal = self.fatal_error,
                    error = %err,
                    "failed to load article log"
                );
                self.error = Some(
                    err.message()
                        .map(str::to_string)
                        .unwrap_or_else(|| self.locale.messages().connection_error.to_string()),
                );
            }
        }
    }

    /// Clear the error; closes the view if the error was fatal
    pub fn dismiss_error(&mut self) -> HistoryAction {
        self.error = None;
        if std::mem::take(&mut self.fatal_error) {
            self.close()
        } else {
            HistoryAction::None
        }
    }

    /// Request closing the view
    pub fn close(&self) -> HistoryAction {
        HistoryAction::Close
    }

    /// Load the next page, if any
    pub fn next_page(&mut self) -> HistoryAction {
        let target = navigation::step_page(self.current_page, 1, self.total_pages());
        self.request_page(target)
    }

    /// Load the previous page, if any
    pub fn prev_page(&mut self) -> HistoryAction {
        let target = navigation::step_page(self.current_page, -1, self.total_pages());
        self.request_page(target)
    }

    /// Load the first page unless it is already shown
    pub fn first_page(&mut self) -> HistoryAction {
        let target = (self.current_page != 1).then_some(1);
        self.request_page(target)
    }

    /// Load the last page unless it is already shown
    pub fn last_page(&mut self) -> HistoryAction {
        let last = self.total_pages();
        let target = (self.current_page != last).then_some(last);
        self.request_page(target)
    }

    /// Reload the current page
    pub fn reload(&mut self) -> HistoryAction {
        self.request_page(Some(self.current_page))
    }

    /// Start a page load unless one is already in flight
    fn request_page(&mut self, page: Option<u32>) -> HistoryAction {
        if self.loading {
            return HistoryAction::None;
        }
        match page {
            Some(page) => HistoryAction::Load(self.load_page(page)),
            None => HistoryAction::None,
        }
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        let last = self.row_count().saturating_sub(1);
        self.selected = navigation::select_next(self.selected, last);
        self.sync_scroll();
    }

    /// Move selection up
    pub fn select_prev(&mut self) {
        self.selected = navigation::select_prev(self.selected);
        self.sync_scroll();
    }

    /// Go to first row
    pub fn select_first(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    /// Go to last row
    pub fn select_last(&mut self) {
        self.selected = self.row_count().saturating_sub(1);
        self.sync_scroll();
    }

    fn sync_scroll(&mut self) {
        self.scroll_offset =
            navigation::keep_visible(self.selected, self.scroll_offset, self.visible_rows.get());
    }

    /// Advance the loading spinner
    pub fn tick(&mut self) {
        if self.loading {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    /// Article identifier
    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    /// UI language
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Entries per page
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Whether a fetch is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Entries of the current page, if any page has loaded
    pub fn entries(&self) -> Option<&[LogEntry]> {
        self.entries.as_deref()
    }

    /// Number of table rows
    pub fn row_count(&self) -> usize {
        self.entries.as_ref().map_or(0, Vec::len)
    }

    /// Total entries reported by the API
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Page whose entries are shown
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Number of pages for the reported total (at least one)
    pub fn total_pages(&self) -> u32 {
        model::total_pages(self.total_count, self.per_page)
    }

    /// Error shown in the error dialog
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether dismissing the current error closes the view
    pub fn is_fatal_error(&self) -> bool {
        self.fatal_error
    }

    /// Currently selected entry
    pub fn selected_entry(&self) -> Option<&LogEntry> {
        self.entries.as_ref()?.get(self.selected)
    }
}
