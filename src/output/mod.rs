//! Report formatting and display
//!
//! Scanning produces plain data; everything that touches the terminal lives
//! here. A `Reporter` renders to any `termcolor::WriteColor`, so the same code
//! drives colored stdout and the plain strings used in tests.
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Human-readable byte formatting
//! - `reporter` - The `Reporter` value and its stdout/string entry points
//! - `tree` - Size-annotated tree rendering
//! - `summary` - Per-extension summary table
//! - `json` - JSON output

mod config;
mod json;
mod reporter;
mod summary;
mod tree;
mod utils;

// Re-export public types and functions
pub use config::OutputConfig;
pub use json::{JsonReport, print_json};
pub use reporter::Reporter;
pub use utils::human_readable;
