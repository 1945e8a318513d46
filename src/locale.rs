//! Localized UI strings
//!
//! Every user-visible string of the history view comes from a [`Messages`] table.

use std::str::FromStr;

use thiserror::Error;

use crate::model::LogEntryType;

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// Static message table for one locale
#[derive(Debug)]
pub struct Messages {
    pub heading: &'static str,
    pub close: &'static str,
    pub error_label: &'static str,
    pub error_title: &'static str,
    pub connection_error: &'static str,
    pub loading: &'static str,
    pub no_entries: &'static str,
    pub reload_hint: &'static str,
    pub not_available: &'static str,
    pub col_rev: &'static str,
    pub col_flags: &'static str,
    pub col_by: &'static str,
    pub col_date: &'static str,
    pub col_comment: &'static str,
    flag_new: &'static str,
    flag_title: &'static str,
    flag_source: &'static str,
    flag_name: &'static str,
    page_created: &'static str,
    source_changed: &'static str,
    title_changed: (&'static str, &'static str),
    renamed: (&'static str, &'static str),
    page_of: &'static str,
    revisions: &'static str,
}

static EN: Messages = Messages {
    heading: "Page history",
    close: "Close",
    error_label: "Error:",
    error_title: "Error",
    connection_error: "Could not connect to the server",
    loading: "Loading",
    no_entries: "No revisions recorded for this page.",
    reload_hint: "Press r to reload",
    not_available: "n/a",
    col_rev: "Rev.",
    col_flags: "Flags",
    col_by: "By",
    col_date: "Date",
    col_comment: "Comment",
    flag_new: "New page created",
    flag_title: "Title changed",
    flag_source: "Page source changed",
    flag_name: "Page renamed/moved/deleted",
    page_created: "Page created",
    source_changed: "Page source changed",
    title_changed: ("Title changed from", "to"),
    renamed: ("Page renamed from", "to"),
    page_of: "of",
    revisions: "revisions",
};

static RU: Messages = Messages {
    heading: "История изменений",
    close: "Закрыть",
    error_label: "Ошибка:",
    error_title: "Ошибка",
    connection_error: "Ошибка связи с сервером",
    loading: "Загрузка",
    no_entries: "У этой страницы нет правок.",
    reload_hint: "Нажмите r, чтобы обновить",
    not_available: "n/a",
    col_rev: "Прав.",
    col_flags: "Флаги",
    col_by: "От",
    col_date: "Дата",
    col_comment: "Комментарий",
    flag_new: "Создана новая страница",
    flag_title: "Изменился заголовок",
    flag_source: "Изменился текст статьи",
    flag_name: "Страница переименована/удалена",
    page_created: "Создание новой страницы",
    source_changed: "Изменение текста статьи",
    title_changed: ("Заголовок изменён с", "на"),
    renamed: ("Страница переименована из", "в"),
    page_of: "из",
    revisions: "правок",
};

impl Locale {
    /// Message table for this locale
    pub fn messages(self) -> &'static Messages {
        match self {
            Self::En => &EN,
            Self::Ru => &RU,
        }
    }
}

impl Messages {
    /// Tooltip-style description of an entry flag
    pub fn flag_description(&self, entry_type: LogEntryType) -> &'static str {
        match entry_type {
            LogEntryType::New => self.flag_new,
            LogEntryType::Title => self.flag_title,
            LogEntryType::Source => self.flag_source,
            LogEntryType::Name => self.flag_name,
        }
    }

    /// Fixed default comment for types that need no details
    pub fn plain_default(&self, entry_type: LogEntryType) -> Option<&'static str> {
        match entry_type {
            LogEntryType::New => Some(self.page_created),
            LogEntryType::Source => Some(self.source_changed),
            LogEntryType::Title | LogEntryType::Name => None,
        }
    }

    /// Words framing `"<prev>"` and `"<new>"` in a transition comment
    pub fn transition_words(&self, entry_type: LogEntryType) -> Option<(&'static str, &'static str)> {
        match entry_type {
            LogEntryType::Title => Some(self.title_changed),
            LogEntryType::Name => Some(self.renamed),
            LogEntryType::New | LogEntryType::Source => None,
        }
    }

    /// Footer text, e.g. "2 of 5 · 120 revisions"
    pub fn page_footer(&self, page: u32, total_pages: u32, total_count: u64) -> String {
        format!(
            "{page} {} {total_pages} · {total_count} {}",
            self.page_of, self.revisions
        )
    }
}

/// Error returned when parsing an unknown locale name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown locale '{0}' (expected 'en' or 'ru')")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "ru" | "russian" => Ok(Self::Ru),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}
