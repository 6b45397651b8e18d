//! Terminal UI components.
//!
//! - [`viewport`]: Scroll position and visible range management
//! - text area and footer bars, drawn by [`render`]

pub mod viewport;

mod render;
mod status;

pub use render::{line_number_width, render};
