//! CLI output formatting
//!
//! Provides human-readable terminal display for draws.

pub mod display;

pub use display::{render_draw_summary, render_error};
