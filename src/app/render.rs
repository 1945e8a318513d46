//! Rendering for the application

use ratatui::Frame;

use super::state::App;
use crate::keys;
use crate::ui::widgets;

impl App {
    /// Render the history modal and the key hints
    pub fn render(&self, frame: &mut Frame) {
        self.history_view.render(frame, frame.area());

        let hints = if self.history_view.error().is_some() {
            keys::ERROR_DIALOG_HINTS
        } else {
            keys::HISTORY_VIEW_HINTS
        };
        widgets::render_status_bar(frame, hints);
    }
}
