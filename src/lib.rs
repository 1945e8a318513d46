//! Article History - revision log viewer for wiki articles
//!
//! A TUI that shows an article's revision history one page at a time.
//!
//! This library provides:
//! - [`api`]: Article log API access
//! - [`app`]: Application state and logic (the mount point)
//! - [`config`]: Command-line configuration
//! - [`keys`]: Key binding definitions
//! - [`locale`]: Localized UI strings
//! - [`logging`]: File logging setup
//! - [`model`]: Domain models
//! - [`ui`]: User interface components

pub mod api;
pub mod app;
pub mod config;
pub mod keys;
pub mod locale;
pub mod logging;
pub mod model;
pub mod ui;
