//! Error dialog shown on top of the history modal
//!
//! A single-button message box: `Error: <message>` and a Close button.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::keys;
use crate::locale::Locale;
use crate::ui::theme;

/// Preferred dialog width (clamped to the terminal)
const DIALOG_WIDTH: u16 = 50;

/// Dialog result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    /// The user pressed the dialog's button
    Dismissed,
}

/// Error message dialog
#[derive(Debug, Clone, Copy)]
pub struct ErrorDialog<'a> {
    message: &'a str,
    locale: Locale,
}

impl<'a> ErrorDialog<'a> {
    /// Create a dialog for `message`
    pub fn new(message: &'a str, locale: Locale) -> Self {
        Self { message, locale }
    }

    /// Handle key input, returns Some(result) when the dialog should close
    pub fn handle_key(&self, key: KeyEvent) -> Option<DialogResult> {
        keys::is_dismiss(key.code).then_some(DialogResult::Dismissed)
    }

    /// Message line: bold label followed by the message text
    pub fn message_line(&self) -> Line<'a> {
        let msgs = self.locale.messages();
        Line::from(vec![
            Span::styled(
                msgs.error_label,
                Style::default()
                    .fg(theme::error::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::raw(self.message),
        ])
    }

    /// Render the dialog centered in `area`
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let msgs = self.locale.messages();

        let width = DIALOG_WIDTH.min(area.width.saturating_sub(4));
        let message = Paragraph::new(self.message_line())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        // Inside the borders
        let message_rows = message.line_count(width.saturating_sub(2)).max(1) as u16;
        // borders + blank + message + blank + button
        let height = message_rows.saturating_add(5).min(area.height);

        let dialog_area = centered_rect(width, height, area);
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(format!(" {} ", msgs.error_title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::error::ACCENT));
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        // The button row is kept when the terminal is too short for the whole message
        let [_, message_area, _, button_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let button = Span::styled(
            format!("[ {} ]", msgs.close),
            Style::default()
                .fg(theme::error::BUTTON_FG)
                .bg(theme::error::ACCENT)
                .add_modifier(Modifier::BOLD),
        );

        frame.render_widget(message, message_area);
        frame.render_widget(
            Paragraph::new(Line::from(button)).alignment(Alignment::Center),
            button_area,
        );
    }
}

/// Calculate a centered rectangle within the given area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical_margin = area.height.saturating_sub(height) / 2;
    let horizontal_margin = area.width.saturating_sub(width) / 2;

    let vertical_layout = Layout::vertical([
        Constraint::Length(vertical_margin),
        Constraint::Length(height),
        Constraint::Length(vertical_margin),
    ])
    .split(area);

    let horizontal_layout = Layout::horizontal([
        Constraint::Length(horizontal_margin),
        Constraint::Length(width),
        Constraint::Length(horizontal_margin),
    ])
    .split(vertical_layout[1]);

    horizontal_layout[1]
}
