//! Configuration management for domain-label.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config files (user, project, explicit `--config`)
//!
//! Priority, highest first: CLI flags > `--config` file > project
//! `.domain-label.toml` > user config > built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::input::InputSource;
use crate::render::OutputFormat;

/// Name of the per-project config file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".domain-label.toml";

/// Command-line arguments for domain-label
#[derive(Debug, Parser)]
#[command(name = "domain-label")]
#[command(about = "Render documents with their domain labels")]
#[command(version)]
pub struct Args {
    /// Document input (JSON array or JSON Lines); omit or use `-` for stdin
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, help = "Output format (text, html, json)")]
    pub format: Option<OutputFormat>,

    /// Explicit config file, applied over user and project config
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Settings that may appear in a config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    /// Load and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config TOML: {}", path.display()))
    }

    /// Load a config file, or `None` if it does not exist
    pub fn load_if_exists(path: &Path) -> Result<Option<Self>> {
        if !path.is_file() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub input: InputSource,
    pub format: OutputFormat,
    pub log_level: String,
    /// Config files that were applied, lowest priority first
    pub config_sources: Vec<PathBuf>,
}

impl Config {
    /// Create configuration from explicit arguments, searching the default
    /// config locations
    pub fn from_args(args: Args) -> Result<Self> {
        let project_dir =
            std::env::current_dir().context("Failed to determine current directory")?;
        Self::resolve(args, &Self::default_config_paths(&project_dir))
    }

    /// Candidate config files, lowest priority first
    pub fn default_config_paths(project_dir: &Path) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // User global config: ~/.config/domain-label/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("domain-label").join("config.toml"));
        }

        paths.push(project_dir.join(PROJECT_CONFIG_FILE));
        paths
    }

    /// Merge arguments with the given config files (useful for testing)
    pub fn resolve(args: Args, search_paths: &[PathBuf]) -> Result<Self> {
        let mut format = OutputFormat::default();
        let mut config_sources = Vec::new();

        for path in search_paths {
            // The explicit file is applied last; don't load it twice
            if let Some(explicit) = &args.config {
                if same_file(path, explicit) {
                    continue;
                }
            }

            if let Some(file) = FileConfig::load_if_exists(path)? {
                log::debug!("Loaded config file: {}", path.display());
                format = file.format.unwrap_or(format);
                config_sources.push(path.clone());
            }
        }

        // An explicit config file must exist
        if let Some(path) = &args.config {
            let file = FileConfig::load(path)?;
            log::debug!("Loaded explicit config file: {}", path.display());
            format = file.format.unwrap_or(format);
            config_sources.push(path.clone());
        }

        if let Some(cli_format) = args.format {
            format = cli_format;
        }

        Ok(Config {
            input: InputSource::from_arg(args.input),
            format,
            log_level: args.log_level,
            config_sources,
        })
    }

    /// True if any config file contributed to this configuration
    pub fn has_config_file(&self) -> bool {
        !self.config_sources.is_empty()
    }
}

/// Compare two config paths, resolving symlinks and relative parts when
/// both exist
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from(["domain-label", "--format", "json", "docs.jsonl"])
            .expect("parse args");

        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.input, Some(PathBuf::from("docs.jsonl")));
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Args::try_parse_from(["domain-label", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_defaults_without_config_files() {
        let args = Args::try_parse_from(["domain-label"]).expect("parse args");
        let config = Config::resolve(args, &[]).expect("resolve");

        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.input, InputSource::Stdin);
        assert!(!config.has_config_file());
    }

    #[test]
    fn test_file_config_rejects_unknown_keys() {
        assert!(toml::from_str::<FileConfig>("colour = true").is_err());
    }

    #[test]
    fn test_default_config_paths_end_with_project_file() {
        let paths = Config::default_config_paths(Path::new("/work"));
        assert_eq!(paths.last(), Some(&PathBuf::from("/work/.domain-label.toml")));
    }
}
