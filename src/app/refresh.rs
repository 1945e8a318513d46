//! Page fetching
//!
//! The request runs on a worker thread; the UI thread polls for the result.

use std::sync::{Arc, mpsc};
use std::thread;

use super::state::App;
use crate::api::ApiError;
use crate::ui::views::PageRequest;

impl App {
    /// Run `request` on a worker thread
    pub(crate) fn start_fetch(&mut self, request: PageRequest) {
        if self.in_flight.is_some() {
            tracing::warn!(page = request.page, "fetch already in flight, request dropped");
            return;
        }

        tracing::info!(
            page_id = %request.page_id,
            page = request.page,
            from = request.range.from,
            to = request.range.to,
            "fetching article log"
        );

        let (tx, rx) = mpsc::channel();
        let source = Arc::clone(&self.source);
        thread::spawn(move || {
            let result = source.fetch_article_log(&request.page_id, request.range);
            // Receiver is gone if the modal closed first
            let _ = tx.send(result);
        });

        self.in_flight = Some(rx);
    }

    /// Apply the in-flight fetch result if it has arrived.
    ///
    /// Returns true when a result was applied.
    pub fn poll_fetch(&mut self) -> bool {
        let Some(rx) = &self.in_flight else {
            return false;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(mpsc::TryRecvError::Empty) => return false,
            Err(mpsc::TryRecvError::Disconnected) => Err(ApiError::WorkerStopped),
        };

        self.in_flight = None;
        self.history_view.finish_load(result);
        true
    }
}
