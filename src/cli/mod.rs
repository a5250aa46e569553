//! # Command-Line Interface
//!
//! Reads `shapes.txt` from the working directory, sorts the shapes by area
//! and prints a summary. The input path is not a command-line argument; a
//! `shapes.toml` project config may point elsewhere.
//!
//! ## Output Formats
//!
//! The `--format` flag selects:
//! - `text` (default) - Type names followed by summary lines
//! - `json` - A single JSON object with `shapes` and `summary`
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! shapes --verbose
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and print the report.

mod app;
mod output;
mod report;

pub use app::{run, summarize, Cli};
pub use output::{Output, OutputFormat};
pub use report::{format_number, Report, ShapeEntry, Summary};
