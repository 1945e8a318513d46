//! Rendering tests for the error dialog and status bar

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use article_history::keys;
use article_history::locale::Locale;
use article_history::ui::components::ErrorDialog;
use article_history::ui::widgets::build_status_bar;

use crate::common::buffer_lines;

#[test]
fn test_error_dialog_centered() {
    let dialog = ErrorDialog::new("Could not connect to the server", Locale::En);

    let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
    terminal
        .draw(|frame| dialog.render(frame, frame.area()))
        .unwrap();
    let lines = buffer_lines(terminal.backend().buffer());

    let message_row = lines
        .iter()
        .position(|l| l.contains("Error: Could not connect to the server"))
        .expect("message row");
    let button_row = lines
        .iter()
        .position(|l| l.contains("[ Close ]"))
        .expect("button row");
    assert_eq!(button_row, message_row + 2);
    assert!(lines.iter().any(|l| l.contains(" Error ")));
}

#[test]
fn test_error_dialog_wraps_long_message() {
    let message = "The server answered with something this dialog cannot fit on one line";
    let dialog = ErrorDialog::new(message, Locale::En);

    let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
    terminal
        .draw(|frame| dialog.render(frame, frame.area()))
        .unwrap();
    let lines = buffer_lines(terminal.backend().buffer());

    assert!(lines.iter().any(|l| l.contains("Error: The server")));
    assert!(lines.iter().any(|l| l.contains("one line")));
    assert!(lines.iter().any(|l| l.contains("[ Close ]")));
}

#[test]
fn test_error_dialog_long_words_keep_button() {
    // Each word fills most of a row, so wrapping leaves every row partly empty
    let word = "x".repeat(25);
    let message = [word.as_str(); 4].join(" ");
    let dialog = ErrorDialog::new(&message, Locale::En);

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal
        .draw(|frame| dialog.render(frame, frame.area()))
        .unwrap();
    let lines = buffer_lines(terminal.backend().buffer());

    let word_rows: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| l.contains(&word))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(word_rows.len(), 4, "{lines:#?}");

    let button_row = lines
        .iter()
        .position(|l| l.contains("[ Close ]"))
        .expect("button row");
    assert_eq!(button_row, word_rows[3] + 2);
}

#[test]
fn test_history_hints() {
    let line = build_status_bar(keys::HISTORY_VIEW_HINTS);
    let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
    assert_snapshot!(text.trim(), @"[j/k] Move   [n/p] Page   [[/]] First/Last   [r] Reload   [q] Close");
}
