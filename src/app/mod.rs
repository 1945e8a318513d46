//! Application module
//!
//! Contains the mount point of the history modal, split into:
//! - `state`: App struct, construction and close handling
//! - `input`: Key event handling
//! - `refresh`: Background page fetching
//! - `render`: UI rendering

mod input;
mod refresh;
mod render;
mod state;

pub use state::{App, AppOptions};
