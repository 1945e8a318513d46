//! History View key handling

use crossterm::event::KeyEvent;

use super::{HistoryAction, HistoryView};
use crate::keys;
use crate::ui::components::{DialogResult, ErrorDialog};

impl HistoryView {
    /// Handle key input
    ///
    /// While the error dialog is open it receives every key.
    pub fn handle_key(&mut self, key: KeyEvent) -> HistoryAction {
        if let Some(error) = &self.error {
            let result = ErrorDialog::new(error, self.locale()).handle_key(key);
            return match result {
                Some(DialogResult::Dismissed) => self.dismiss_error(),
                None => HistoryAction::None,
            };
        }

        match key.code {
            // Rows
            k if keys::is_move_down(k) => {
                self.select_next();
                HistoryAction::None
            }
            k if keys::is_move_up(k) => {
                self.select_prev();
                HistoryAction::None
            }
            k if k == keys::GO_TOP => {
                self.select_first();
                HistoryAction::None
            }
            k if k == keys::GO_BOTTOM => {
                self.select_last();
                HistoryAction::None
            }

            // Pages
            k if keys::is_next_page(k) => self.next_page(),
            k if keys::is_prev_page(k) => self.prev_page(),
            k if k == keys::FIRST_PAGE => self.first_page(),
            k if k == keys::LAST_PAGE => self.last_page(),
            k if k == keys::RELOAD => self.reload(),

            // Close
            k if keys::is_close(k) => self.close(),

            _ => HistoryAction::None,
        }
    }
}
