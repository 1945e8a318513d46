//! HTTP client for the article log endpoint
//!
//! Issues `GET {base}/api/articles/{page_id}/log?from=..&to=..` and decodes the JSON body.

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use serde::Deserialize;

use super::constants::{self, paths, query};
use super::{ApiError, ArticleLogSource};
use crate::model::{ArticleLog, PageRange};

/// Blocking client for the article API
#[derive(Debug, Clone)]
pub struct ArticleClient {
    base_url: Url,
    http: Client,
}

/// Error body returned by the API on failure (`{"error": "..."}`)
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ArticleClient {
    /// Create a client for the API rooted at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(constants::USER_AGENT)
            .build()?;

        Ok(Self {
            base_url: parsed,
            http,
        })
    }

    /// Build the log URL for a page and offset range
    pub fn log_url(&self, page_id: &str, range: PageRange) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            for part in paths::ARTICLES.split('/') {
                segments.push(part);
            }
            segments.push(page_id).push(paths::LOG);
        }
        url.query_pairs_mut()
            .append_pair(query::FROM, &range.from.to_string())
            .append_pair(query::TO, &range.to.to_string());
        url
    }
}

impl ArticleLogSource for ArticleClient {
    fn fetch_article_log(&self, page_id: &str, range: PageRange) -> Result<ArticleLog, ApiError> {
        let url = self.log_url(page_id, range);
        tracing::debug!(%url, "requesting article log");

        let response = self.http.get(url).send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: parse_error_body(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Extract the `error` field from a failure body, if it is JSON and has one
fn parse_error_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok()?.error
}
