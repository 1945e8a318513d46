//! Application state and lifecycle

use std::fmt;
use std::sync::Arc;
use std::sync::mpsc::Receiver;

use crate::api::{ApiError, ArticleLogSource};
use crate::locale::Locale;
use crate::model::{ArticleLog, DEFAULT_PER_PAGE};
use crate::ui::views::HistoryView;

/// Outcome of a background fetch
pub(crate) type FetchResult = Result<ArticleLog, ApiError>;

/// Display options for the history modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppOptions {
    /// Entries per page
    pub per_page: u32,
    /// UI language
    pub locale: Locale,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            locale: Locale::default(),
        }
    }
}

/// The mounted history modal
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// History view state
    pub history_view: HistoryView,
    /// Where article log pages come from
    pub(super) source: Arc<dyn ArticleLogSource>,
    /// Receiver for the fetch in flight (at most one)
    pub(super) in_flight: Option<Receiver<FetchResult>>,
    /// Invoked once when the modal closes
    on_close: Option<Box<dyn FnMut()>>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("running", &self.running)
            .field("history_view", &self.history_view)
            .field("in_flight", &self.in_flight.is_some())
            .finish_non_exhaustive()
    }
}

impl App {
    /// Mount the history modal for `page_id` and start loading the first page.
    pub fn new(
        page_id: impl Into<String>,
        source: Arc<dyn ArticleLogSource>,
        options: AppOptions,
    ) -> Self {
        let mut app = Self {
            running: true,
            history_view: HistoryView::new(page_id, options.per_page, options.locale),
            source,
            in_flight: None,
            on_close: None,
        };

        let request = app.history_view.load_page(1);
        app.start_fetch(request);

        app
    }

    /// Install the callback invoked when the modal closes
    pub fn with_on_close(mut self, on_close: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(on_close));
        self
    }

    /// Whether a fetch is in flight
    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Close the modal: stop the loop and notify the owner.
    ///
    /// A fetch still in flight is abandoned; its result is dropped with the receiver.
    pub fn close(&mut self) {
        if !self.running {
            return;
        }
        tracing::info!(page_id = %self.history_view.page_id(), "closing history");
        self.running = false;
        self.in_flight = None;
        if let Some(on_close) = self.on_close.as_mut() {
            on_close();
        }
    }

    /// Periodic work: collect a finished fetch and advance the spinner
    pub fn tick(&mut self) {
        self.poll_fetch();
        self.history_view.tick();
    }
}
