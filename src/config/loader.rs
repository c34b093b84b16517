use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::CoolmapConfig;
use crate::errors::{CoolmapError, Result};

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".coolmap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str, path: &Path) -> Result<CoolmapConfig> {
    toml::from_str::<CoolmapConfig>(contents)
        .map_err(|e| CoolmapError::config_parse(path, e.message()))
}

/// Load a config file the user named explicitly. Any failure is an error.
pub fn load_config_from(path: &Path) -> Result<CoolmapConfig> {
    let contents = read_config_file(path).map_err(|source| CoolmapError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents, path)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading a discovered config file; failures fall back to `None`
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<CoolmapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents, config_path) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        // Logged at error so it still shows when the TUI quiets logging
        Err(e) => {
            log::error!("{}. Ignoring this file.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Per-user config location, e.g. `~/.config/coolmap/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("coolmap").join("config.toml"))
}

/// Discover configuration starting from `start`.
///
/// Searches `start` and up to nine ancestors for `.coolmap.toml`, then the
/// per-user config file, and falls back to defaults.
pub fn discover_config(start: PathBuf) -> CoolmapConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            CoolmapConfig::default()
        })
}

/// Load configuration from the working directory hierarchy
pub fn load_config() -> CoolmapConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            CoolmapConfig::default()
        }
    }
}

/// Explicit path when given, discovery otherwise
pub fn resolve_config(explicit: Option<&Path>) -> Result<CoolmapConfig> {
    match explicit {
        Some(path) => load_config_from(path),
        None => Ok(load_config()),
    }
}
