//! # Storage Layer
//!
//! File input for the shape statistics tool.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Shape list | One shape per line (`C 2`, `R 3 4`, ...) | `shapes.txt` |
//! | Project config | TOML | `shapes.toml` |
//! | Global config | TOML | `~/.config/shapes/config.toml` |
//!
//! ## Key Types
//!
//! - [`ShapeLoader`] - Reads a shape list into domain shapes
//! - [`Config`] - Project and global configuration

mod config;
mod loader;

pub use config::{
    Config, ConfigError, GlobalConfig, OutputFormat as ConfiguredFormat, ProjectConfig,
    DEFAULT_INPUT, PROJECT_CONFIG_FILE,
};
pub use loader::{
    parse_line, LineError, LoadReport, LoadWarning, ParamRegister, ParsedLine, ShapeLoader,
};
