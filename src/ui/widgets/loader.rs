//! Loading indicator widget
//!
//! A small boxed spinner drawn over the top-left corner of the table while a page loads.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::theme;

/// Spinner animation frames
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for a tick counter
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Build the spinner line, e.g. "⠋ Loading…"
pub fn loader_line(label: &str, tick: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            spinner_frame(tick),
            Style::default().fg(theme::history_view::SPINNER),
        ),
        Span::raw(" "),
        Span::raw(format!("{label}…")).bold(),
    ])
}

/// Render the loader box inside `area`, offset one cell from its corner
pub fn render_loader(frame: &mut Frame, area: Rect, label: &str, tick: usize) {
    let line = loader_line(label, tick);
    let width = (line.width() as u16 + 4).min(area.width.saturating_sub(1));
    let height = 3.min(area.height.saturating_sub(1));
    if width == 0 || height == 0 {
        return;
    }

    let loader_area = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width,
        height,
    };

    frame.render_widget(Clear, loader_area);
    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL)).centered(),
        loader_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_frame(0), spinner_frame(SPINNER_FRAMES.len()));
        assert_ne!(spinner_frame(0), spinner_frame(1));
    }

    #[test]
    fn test_loader_line() {
        let line = loader_line("Loading", 0);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "⠋ Loading…");
    }
}
