//! UI layer
//!
//! Contains the history view, widgets, components, and theme definitions.

pub mod components;
pub mod navigation;
pub mod theme;
pub mod views;
pub mod widgets;
