//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tickle/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::store::DEFAULT_STORE_PATH;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TickleConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub store_path: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "tickle.log";
const CONFIG_DIR: &str = ".tickle";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub store_path: PathBuf,
    pub log_level: LevelFilter,
    /// None when there is no home directory to put the log in.
    pub log_file: Option<PathBuf>,
}

/// Settings given on the command line (None/false = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub file: Option<PathBuf>,
    pub verbose: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.tickle/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_DIR))
}

/// Returns the path to `~/.tickle/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.tickle/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TickleConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TickleConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TickleConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TickleConfig::default());
    }

    let config = parse_config(&fs::read_to_string(&path)?)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<TickleConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

const DEFAULT_CONFIG: &str = r#"# Tickle Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# store_path = "todos.json"      # Or TICKLE_FILE env var, or --file
# log_level = "info"             # error, warn, info, debug, trace (or TICKLE_LOG_LEVEL)
# log_file = "tickle.log"        # Path relative to ~/.tickle/
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TickleConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_from(config, cli, config_dir().as_deref(), |key| {
        std::env::var(key).ok()
    })
}

/// `resolve` with the config directory and environment passed in.
pub fn resolve_from(
    config: &TickleConfig,
    cli: &CliOverrides,
    config_dir: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Store path: CLI → env → config → default
    let store_path = cli
        .file
        .clone()
        .or_else(|| env("TICKLE_FILE").map(PathBuf::from))
        .or_else(|| config.general.store_path.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));

    // Log level: --verbose → env → config → default
    let log_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        env("TICKLE_LOG_LEVEL")
            .or_else(|| config.general.log_level.clone())
            .and_then(|level| parse_level(&level))
            .unwrap_or(DEFAULT_LOG_LEVEL)
    };

    // Log file: relative paths live under the config dir
    let log_file_name = config
        .general
        .log_file
        .as_deref()
        .unwrap_or(DEFAULT_LOG_FILE);
    let log_file = config_dir.map(|dir| dir.join(log_file_name));

    ResolvedConfig {
        store_path,
        log_level,
        log_file,
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.parse() {
        Ok(filter) => Some(filter),
        Err(_) => {
            warn!("Unknown log level {:?}, using {}", level, DEFAULT_LOG_LEVEL);
            None
        }
    }
}
