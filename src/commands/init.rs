use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE};
use crate::errors::CoolmapError;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Write the default configuration into `dir`.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        return Err(CoolmapError::ConfigExists { path: config_path }.into());
    }

    io::write_file(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
    log::debug!("wrote {}", config_path.display());
    Ok(config_path)
}

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}
