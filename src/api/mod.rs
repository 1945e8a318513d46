//! Article API access layer
//!
//! This module fetches article log pages from the wiki's HTTP API.

pub mod constants;
mod client;

pub use client::ArticleClient;

use thiserror::Error;

use crate::model::{ArticleLog, PageRange};

/// Errors that can occur when fetching an article log
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("server returned {status}: {}", message.as_deref().unwrap_or("no details"))]
    Server {
        status: u16,
        /// The `error` field of the response body, when present
        message: Option<String>,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode article log: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("Fetch worker stopped without a result")]
    WorkerStopped,
}

impl ApiError {
    /// User-facing message carried by the error, if the server sent one
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Server { message, .. } => message.as_deref().filter(|m| !m.trim().is_empty()),
            _ => None,
        }
    }
}

/// Source of article log pages
///
/// Implemented by [`ArticleClient`] for the HTTP API; tests substitute their own.
pub trait ArticleLogSource: Send + Sync {
    /// Fetch the entries in `range` for the article identified by `page_id`
    fn fetch_article_log(&self, page_id: &str, range: PageRange) -> Result<ArticleLog, ApiError>;
}
