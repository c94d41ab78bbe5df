//! Report generation for ranked entries
//!
//! Two generators are provided, each accessed through a `generate` function that writes
//! into any [`core::fmt::Write`]:
//! - **Console**: Terminal listing ordered by descending awesomeness, with optional ANSI colors
//! - **JSON**: Machine-readable `{"entries": [...]}` document in ranking order

mod console;
mod json;

pub use console::generate as generate_console;
pub use json::generate as generate_json;
