use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::Deserialize;

pub const DEFAULT_PATH: &str = "gpsformats.toml";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: LevelFilter,
    pub csv: CsvConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            csv: CsvConfig::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CsvConfig {
    // drop a leading row equal to the column names when reading. writing
    // always emits that row, so without this a written file reads back with
    // the header as its first point
    pub skip_header: bool,
}

pub fn load(path: &Path) -> Result<Config> {
    let data = fs::read_to_string(path).context("Failed to read config")?;
    let config = toml::from_str(&data).context("Failed to parse config")?;
    Ok(config)
}

/// Load the given config, or the default file if present, or built-in defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load(path),
        None => {
            let path = Path::new(DEFAULT_PATH);
            if path.exists() {
                load(path)
            } else {
                Ok(Config::default())
            }
        }
    }
}
