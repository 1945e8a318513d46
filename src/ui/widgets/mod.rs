//! Reusable UI widgets

mod loader;
mod status_bar;

pub use loader::{loader_line, render_loader, spinner_frame};
pub use status_bar::{build_status_bar, render_status_bar, status_bar_area};
