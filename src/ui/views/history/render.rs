//! History View rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Cell, Clear, Paragraph, Row, Table, TableState},
};

use super::HistoryView;
use crate::locale::Locale;
use crate::model::LogEntry;
use crate::ui::components::{self, ErrorDialog};
use crate::ui::{navigation, theme, widgets};

/// Rev. | Flags | By | Date | Comment
///
/// On narrow terminals By and Date give way before Comment does.
const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Length(6),
    Constraint::Length(5),
    Constraint::Max(12),
    Constraint::Max(16),
    Constraint::Min(COMMENT_MIN_WIDTH),
];

const COMMENT_MIN_WIDTH: u16 = 20;

impl HistoryView {
    /// Render the history modal, loader and error dialog into `area`
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let msgs = self.locale.messages();
        let modal_area = modal_rect(area);
        if modal_area.is_empty() {
            return;
        }

        frame.render_widget(Clear, modal_area);
        let block = components::modal_block(msgs.heading, msgs.close);
        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let [list_area, footer_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        match &self.entries {
            Some(entries) if entries.is_empty() => {
                frame.render_widget(
                    components::empty_state(msgs.no_entries, Some(msgs.reload_hint)),
                    list_area,
                );
            }
            Some(entries) => self.render_table(frame, list_area, entries),
            None => {}
        }

        self.render_footer(frame, footer_area);

        if self.loading {
            widgets::render_loader(frame, list_area, msgs.loading, self.spinner_tick);
        }

        if let Some(ref error) = self.error {
            ErrorDialog::new(error, self.locale).render(frame, area);
        }
    }

    fn render_table(&self, frame: &mut Frame, area: Rect, entries: &[LogEntry]) {
        let msgs = self.locale.messages();

        // header row
        let visible_rows = area.height.saturating_sub(1) as usize;
        self.visible_rows.set(visible_rows);
        let offset = navigation::keep_visible(self.selected, self.scroll_offset, visible_rows);

        let header = Row::new(vec![
            msgs.col_rev,
            msgs.col_flags,
            msgs.col_by,
            msgs.col_date,
            msgs.col_comment,
        ])
        .style(
            Style::default()
                .fg(theme::history_view::HEADER)
                .add_modifier(Modifier::BOLD),
        );

        let rows = entries.iter().map(|entry| self.build_row(entry));

        let mut table = Table::new(rows, COLUMN_WIDTHS)
            .header(header)
            .column_spacing(1)
            .row_highlight_style(
                Style::default()
                    .fg(theme::selection::FG)
                    .bg(theme::selection::BG)
                    .add_modifier(Modifier::BOLD),
            );
        if self.loading {
            table = table.style(
                Style::default()
                    .fg(theme::history_view::DIMMED)
                    .add_modifier(Modifier::DIM),
            );
        }

        let mut state = TableState::default()
            .with_offset(offset)
            .with_selected(Some(self.selected));
        frame.render_stateful_widget(table, area, &mut state);
    }

    /// Build a table row for an entry
    fn build_row(&self, entry: &LogEntry) -> Row<'static> {
        let msgs = self.locale.messages();
        let flag_style = Style::default()
            .fg(theme::history_view::flag(entry.entry_type))
            .add_modifier(Modifier::BOLD);
        let user = entry
            .user
            .clone()
            .unwrap_or_else(|| msgs.not_available.to_string());

        Row::new(vec![
            Cell::from(format!("{}.", entry.rev_number)).fg(theme::history_view::REV_NUMBER),
            Cell::from(Span::styled(entry.entry_type.flag().to_string(), flag_style)),
            Cell::from(user).fg(theme::history_view::USER),
            Cell::from(entry.display_date()).fg(theme::history_view::DATE),
            Cell::from(comment_line(entry, self.locale)),
        ])
    }

    /// Footer: paging summary on the left, selected flag description on the right
    ///
    /// The summary keeps its full width; the description is clipped to what is left.
    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let msgs = self.locale.messages();

        let summary = if self.entries.is_some() {
            msgs.page_footer(self.current_page, self.total_pages(), self.total_count)
        } else {
            String::new()
        };
        let summary = Line::from(summary).fg(theme::history_view::FOOTER);

        let [summary_area, description_area] = Layout::horizontal([
            Constraint::Length(summary.width() as u16),
            Constraint::Fill(1),
        ])
        .spacing(1)
        .areas(area);

        frame.render_widget(Paragraph::new(summary), summary_area);

        if let Some(entry) = self.selected_entry() {
            let description = Line::from(vec![
                Span::styled(
                    entry.entry_type.flag().to_string(),
                    Style::default().fg(theme::history_view::flag(entry.entry_type)),
                ),
                Span::raw(format!(": {}", msgs.flag_description(entry.entry_type))),
            ])
            .right_aligned();
            frame.render_widget(Paragraph::new(description), description_area);
        }
    }
}

/// Area of the modal: full width minus a one-cell margin, leaving the last row for the status bar
fn modal_rect(area: Rect) -> Rect {
    let without_status = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    without_status.inner(Margin {
        horizontal: 1,
        vertical: 0,
    })
}

/// Comment cell for an entry
///
/// A non-blank comment is shown as written; otherwise a localized default
/// describing the change is generated, with the old/new values in italics.
pub fn comment_line(entry: &LogEntry, locale: Locale) -> Line<'static> {
    if entry.has_comment() {
        return Line::from(entry.comment.lines().collect::<Vec<_>>().join(" "));
    }

    let msgs = locale.messages();
    let style = Style::default().fg(theme::history_view::DEFAULT_COMMENT);

    if let Some(text) = msgs.plain_default(entry.entry_type) {
        return Line::from(Span::styled(text, style));
    }

    match (
        msgs.transition_words(entry.entry_type),
        entry.entry_type.transition_keys(),
    ) {
        (Some((lead, joiner)), Some((prev_key, new_key))) => {
            let quoted = |value: &str| {
                Span::styled(format!("\"{value}\""), style.add_modifier(Modifier::ITALIC))
            };
            Line::from(vec![
                Span::styled(format!("{lead} "), style),
                quoted(entry.meta_str(prev_key)),
                Span::styled(format!(" {joiner} "), style),
                quoted(entry.meta_str(new_key)),
            ])
        }
        _ => Line::default(),
    }
}
