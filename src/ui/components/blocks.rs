//! Block components for UI rendering
//!
//! Frame patterns shared by the history modal.

use ratatui::{
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Padding},
};

use crate::ui::theme;

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    Block::default().borders(Borders::ALL).title(title)
}

/// Outer frame of the history modal: heading on the left, close hint on the right
pub fn modal_block<'a>(heading: &'a str, close_label: &'a str) -> Block<'a> {
    let title = Line::from(format!(" {heading} "))
        .bold()
        .fg(theme::history_view::TITLE);
    let close = Line::from(format!(" [q] {close_label} ")).red().right_aligned();

    bordered_block(title)
        .title(close)
        .border_style(Style::default().fg(theme::history_view::TITLE))
        .padding(Padding::horizontal(1))
}
