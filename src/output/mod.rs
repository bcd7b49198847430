//! Rendering of a [`crate::ParseResult`].
//!
//! - [`terminal`] - aligned text with binary columns and colors
//! - [`json`] - JSON output

mod json;
mod terminal;

pub use json::render_json;
pub use terminal::{render, to_binary};
