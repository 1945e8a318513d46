//! Reusable UI components
//!
//! Common building blocks for the history modal.

pub mod blocks;
pub mod dialog;
pub mod empty_state;

pub use blocks::*;
pub use dialog::{DialogResult, ErrorDialog, centered_rect};
pub use empty_state::*;
