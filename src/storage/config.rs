//! Configuration handling
//!
//! Configuration is read from `shapes.toml` in the working directory
//! (project) and `~/.config/shapes/config.toml` (global). Missing files
//! fall back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input file read when no project config overrides it
pub const DEFAULT_INPUT: &str = "shapes.txt";

/// Name of the project config file
pub const PROJECT_CONFIG_FILE: &str = "shapes.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Project-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectConfig {
    /// Shape list to read, relative to the project directory
    pub input: PathBuf,

    /// Reject lines with missing parameters or invalid dimensions
    pub strict: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            strict: false,
        }
    }
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default output format (text or json)
    pub default_format: OutputFormat,
}

/// Output format for reports
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Combined configuration (global + project)
#[derive(Debug, Clone)]
pub struct Config {
    pub project: ProjectConfig,
    pub global: GlobalConfig,
    pub project_dir: PathBuf,
}

impl Config {
    /// Loads configuration for the current working directory
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        Self::for_dir(&cwd)
    }

    /// Loads configuration for a specific project directory
    pub fn for_dir(project_dir: &Path) -> Result<Self> {
        let global = Self::load_global()?;
        let project = Self::load_project_config(project_dir)?;

        Ok(Self {
            project,
            global,
            project_dir: project_dir.to_path_buf(),
        })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "shapes", "shapes").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Path of the shape list, resolved against the project directory
    pub fn input_path(&self) -> PathBuf {
        self.project_dir.join(&self.project.input)
    }

    fn load_global() -> Result<GlobalConfig> {
        let config_dir = match Self::global_config_dir() {
            Some(dir) => dir,
            None => return Ok(GlobalConfig::default()),
        };

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read global config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse global config")
    }

    fn load_project_config(project_dir: &Path) -> Result<ProjectConfig> {
        let config_path = project_dir.join(PROJECT_CONFIG_FILE);

        if !config_path.exists() {
            return Ok(ProjectConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read project config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse project config")
    }
}
