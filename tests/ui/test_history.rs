//! Rendering tests for the History View

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use article_history::locale::Locale;
use article_history::model::{ArticleLog, LogEntryType};
use article_history::ui::views::{HistoryView, comment_line};

use crate::common::{buffer_lines, make_entry, make_log, server_error};

fn render(view: &HistoryView, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area()))
        .unwrap();
    buffer_lines(terminal.backend().buffer())
}

fn count_containing(lines: &[String], needle: &str) -> usize {
    lines.iter().filter(|l| l.contains(needle)).count()
}

fn loaded(count: u64, first: u32, last: u32, locale: Locale) -> HistoryView {
    let mut view = HistoryView::new("scp-173", 25, locale);
    view.load_page(1);
    view.finish_load(Ok(make_log(count, first, last)));
    view
}

#[test]
fn test_row_count_matches_entries() {
    let view = loaded(3, 1, 3, Locale::En);
    let lines = render(&view, 100, 24);
    assert_eq!(count_containing(&lines, "15.01.2025 10:30"), 3);
}

#[test]
fn test_full_page_renders_every_row() {
    let view = loaded(60, 1, 25, Locale::En);
    let lines = render(&view, 100, 32);
    assert_eq!(count_containing(&lines, "15.01.2025 10:30"), 25);
}

#[test]
fn test_table_header_and_frame() {
    let view = loaded(3, 1, 3, Locale::En);
    let lines = render(&view, 100, 24);

    assert!(lines[0].contains(" Page history "));
    assert!(lines[0].contains("[q] Close"));
    let header = &lines[1];
    for column in ["Rev.", "Flags", "By", "Date", "Comment"] {
        assert!(header.contains(column), "missing column {column}: {header}");
    }
}

#[test]
fn test_row_contents() {
    let view = loaded(3, 1, 3, Locale::En);
    let lines = render(&view, 100, 24);
    let row = lines
        .iter()
        .find(|l| l.contains("edit 3"))
        .expect("row for revision 3");

    assert!(row.contains("3."));
    assert!(row.contains(" S "));
    assert!(row.contains("n/a"));
    assert!(row.contains("15.01.2025 10:30"));
}

#[test]
fn test_narrow_footer_keeps_page_summary() {
    let mut view = HistoryView::new("scp-173", 25, Locale::Ru);
    view.load_page(1);
    view.finish_load(Ok(ArticleLog {
        entries: vec![make_entry(1, LogEntryType::Name, "edit 1")],
        count: 60,
    }));

    let lines = render(&view, 50, 12);
    assert_eq!(count_containing(&lines, "1 из 3 · 60 правок"), 1, "{lines:#?}");
}

#[test]
fn test_narrow_table_keeps_comment_column() {
    let view = loaded(3, 1, 3, Locale::Ru);
    let lines = render(&view, 50, 12);

    assert!(lines[1].contains("Комментарий"), "{}", lines[1]);
    assert_eq!(count_containing(&lines, "edit 3"), 1);
}

#[test]
fn test_footer_shows_paging_and_flag_description() {
    let view = loaded(60, 1, 25, Locale::En);
    let lines = render(&view, 100, 32);
    assert_eq!(count_containing(&lines, "1 of 3 · 60 revisions"), 1);
    assert_eq!(count_containing(&lines, "S: Page source changed"), 1);
}

#[test]
fn test_russian_labels() {
    let view = loaded(3, 1, 3, Locale::Ru);
    let lines = render(&view, 100, 24);
    assert!(lines[0].contains("История изменений"));
    assert!(lines[1].contains("Комментарий"));
    assert_eq!(count_containing(&lines, "1 из 1 · 3 правок"), 1);
}

#[test]
fn test_empty_page() {
    let view = loaded(0, 1, 0, Locale::En);
    let lines = render(&view, 80, 24);
    assert_eq!(
        count_containing(&lines, "No revisions recorded for this page."),
        1
    );
    assert_eq!(count_containing(&lines, "Press r to reload"), 1);
}

#[test]
fn test_loading_shows_spinner_before_first_page() {
    let mut view = HistoryView::new("scp-173", 25, Locale::En);
    view.load_page(1);
    let lines = render(&view, 80, 24);
    assert_eq!(count_containing(&lines, "Loading…"), 1);
    assert_eq!(count_containing(&lines, "Rev."), 0);
}

#[test]
fn test_loading_keeps_previous_rows() {
    let mut view = loaded(60, 1, 25, Locale::En);
    view.next_page();
    let lines = render(&view, 100, 32);
    assert_eq!(count_containing(&lines, "Loading…"), 1);
    assert!(count_containing(&lines, "15.01.2025 10:30") >= 20);
}

#[test]
fn test_error_dialog() {
    let mut view = HistoryView::new("scp-173", 25, Locale::En);
    view.load_page(1);
    view.finish_load(Err(server_error(Some("Page not found"))));

    let lines = render(&view, 80, 24);
    assert_eq!(count_containing(&lines, "Error: Page not found"), 1);
    assert_eq!(count_containing(&lines, "[ Close ]"), 1);
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let view = loaded(3, 1, 3, Locale::En);
    render(&view, 3, 2);
    render(&view, 1, 1);
}

#[test]
fn test_default_comments_per_type() {
    let mut title = make_entry(3, LogEntryType::Title, "");
    title.meta.insert("prev_title".into(), "SCP-173".into());
    title.meta.insert("title".into(), "The Sculpture".into());
    let mut name = make_entry(4, LogEntryType::Name, " ");
    name.meta.insert("prev_name".into(), "draft:173".into());
    name.meta.insert("name".into(), "scp-173".into());
    let entries = [
        make_entry(1, LogEntryType::New, ""),
        make_entry(2, LogEntryType::Source, ""),
        title,
        name,
        make_entry(5, LogEntryType::Source, "Fixed formatting"),
    ];

    let rendered: Vec<String> = entries
        .iter()
        .map(|entry| {
            let line = comment_line(entry, Locale::En);
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            format!("{} {}: {}", entry.rev_number, entry.entry_type.flag(), text)
        })
        .collect();

    assert_snapshot!(rendered.join("\n"), @r#"
    1 N: Page created
    2 S: Page source changed
    3 T: Title changed from "SCP-173" to "The Sculpture"
    4 R: Page renamed from "draft:173" to "scp-173"
    5 S: Fixed formatting
    "#);
}
