//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

use crate::model::LogEntryType;

/// Colors for the history table
pub mod history_view {
    use super::*;

    /// Modal title color
    pub const TITLE: Color = Color::Cyan;
    /// Table header color
    pub const HEADER: Color = Color::Yellow;
    /// Revision number color
    pub const REV_NUMBER: Color = Color::Magenta;
    /// Author column color
    pub const USER: Color = Color::Blue;
    /// Date column color
    pub const DATE: Color = Color::DarkGray;
    /// Generated (default) comment color
    pub const DEFAULT_COMMENT: Color = Color::Gray;
    /// Footer text color
    pub const FOOTER: Color = Color::DarkGray;
    /// Table text while a page is loading
    pub const DIMMED: Color = Color::DarkGray;
    /// Spinner color
    pub const SPINNER: Color = Color::Yellow;

    /// Flag color for each entry type
    pub fn flag(entry_type: LogEntryType) -> Color {
        match entry_type {
            LogEntryType::New => Color::Green,
            LogEntryType::Title => Color::Cyan,
            LogEntryType::Source => Color::Yellow,
            LogEntryType::Name => Color::Magenta,
        }
    }
}

/// Selection colors
pub mod selection {
    use super::*;

    /// Selected row foreground
    pub const FG: Color = Color::White;
    /// Selected row background
    pub const BG: Color = Color::DarkGray;
}

/// Error dialog colors
pub mod error {
    use super::*;

    /// Border and label color
    pub const ACCENT: Color = Color::Red;
    /// Button foreground
    pub const BUTTON_FG: Color = Color::White;
}
