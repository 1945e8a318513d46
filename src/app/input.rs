//! Input handling for the application

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::App;
use crate::ui::views::HistoryAction;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Handle Ctrl+C globally
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.close();
            return;
        }

        let action = self.history_view.handle_key(key);
        self.handle_history_action(action);
    }

    fn handle_history_action(&mut self, action: HistoryAction) {
        match action {
            HistoryAction::None => {}
            HistoryAction::Close => self.close(),
            HistoryAction::Load(request) => self.start_fetch(request),
        }
    }
}
