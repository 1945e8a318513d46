//! Article API constants
//!
//! Centralized definitions for endpoint paths, query keys, and defaults.

/// Default API base URL
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Endpoint paths
pub mod paths {
    /// Articles collection prefix
    pub const ARTICLES: &str = "api/articles";
    /// Log sub-resource of an article
    pub const LOG: &str = "log";
}

/// Query parameter names
pub mod query {
    /// Inclusive start offset
    pub const FROM: &str = "from";
    /// Exclusive end offset
    pub const TO: &str = "to";
}

/// Value of the `User-Agent` header
pub const USER_AGENT: &str = concat!("article-history/", env!("CARGO_PKG_VERSION"));
