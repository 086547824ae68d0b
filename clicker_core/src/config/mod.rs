//! Configuration loading from TOML files

mod constants;

pub use constants::{
    CurrencyConstants, GameConstants, LadderConstants, ScoreConstants, TradeConstants,
    WinChanceConstants,
};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load game constants from a TOML file, or defaults if the file is absent
pub fn load_constants(path: &Path) -> Result<GameConstants, ConfigError> {
    if !path.exists() {
        return Ok(GameConstants::default());
    }
    load_toml(path)
}
