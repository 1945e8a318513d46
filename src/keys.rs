//! Keybinding definitions
//!
//! All keybindings of the history modal are defined here.

use crossterm::event::KeyCode;
use ratatui::style::Color;

// =============================================================================
// Global keys
// =============================================================================

/// Close the history modal
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Alternative close
pub const ESC: KeyCode = KeyCode::Esc;

/// Check if key closes the modal (q or Esc)
pub fn is_close(code: KeyCode) -> bool {
    matches!(code, QUIT | ESC)
}

// =============================================================================
// Row navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to first row
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to last row
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Page keys
// =============================================================================

/// Next page (vim-ish)
pub const NEXT_PAGE: KeyCode = KeyCode::Char('n');

/// Next page (arrow key)
pub const NEXT_PAGE_ARROW: KeyCode = KeyCode::Right;

/// Previous page
pub const PREV_PAGE: KeyCode = KeyCode::Char('p');

/// Previous page (arrow key)
pub const PREV_PAGE_ARROW: KeyCode = KeyCode::Left;

/// First page
pub const FIRST_PAGE: KeyCode = KeyCode::Char('[');

/// Last page
pub const LAST_PAGE: KeyCode = KeyCode::Char(']');

/// Reload the current page
pub const RELOAD: KeyCode = KeyCode::Char('r');

/// Check if key is next page (n or →)
pub fn is_next_page(code: KeyCode) -> bool {
    matches!(code, NEXT_PAGE | NEXT_PAGE_ARROW)
}

/// Check if key is previous page (p or ←)
pub fn is_prev_page(code: KeyCode) -> bool {
    matches!(code, PREV_PAGE | PREV_PAGE_ARROW)
}

// =============================================================================
// Error dialog keys
// =============================================================================

/// Check if key dismisses the error dialog (Enter, Space, Esc, q)
pub fn is_dismiss(code: KeyCode) -> bool {
    matches!(code, KeyCode::Enter | KeyCode::Char(' ') | QUIT | ESC)
}

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

/// Hints while the history table is shown
pub const HISTORY_VIEW_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "j/k",
        label: "Move",
        color: Color::Cyan,
    },
    KeyHint {
        key: "n/p",
        label: "Page",
        color: Color::Green,
    },
    KeyHint {
        key: "[/]",
        label: "First/Last",
        color: Color::Green,
    },
    KeyHint {
        key: "r",
        label: "Reload",
        color: Color::Blue,
    },
    KeyHint {
        key: "q",
        label: "Close",
        color: Color::Red,
    },
];

/// Hints while the error dialog is open
pub const ERROR_DIALOG_HINTS: &[KeyHint] = &[KeyHint {
    key: "Enter",
    label: "Dismiss",
    color: Color::Red,
}];
