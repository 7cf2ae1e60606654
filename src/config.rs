//! Application configuration.
//!
//! Every field has a default, so an empty or missing config file yields the
//! stock 800x800 window showing the full piece set. Values are read from
//! `chess.toml` (or an explicit path) and can be overridden from the command
//! line.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "chess.toml";

/// Which iteration of the viewer to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Board texture only, clicks report the square
    Board,
    /// Board texture plus the occupancy grid, clicks report whether the square is occupied
    Occupancy,
    /// Board and all 32 piece sprites, clicks report the selected piece
    #[default]
    Pieces,
}

impl Variant {
    pub fn draws_pieces(&self) -> bool {
        matches!(self, Self::Pieces)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            title: "Chess".to_string(),
            resizable: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory holding `shaders/` and `textures/`
    pub root: PathBuf,
    /// Board image file name inside `textures/`, PNG or JPEG
    pub board: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets"),
            board: "board.png".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub clear_color: [f64; 4],
    pub vsync: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.1, 0.1, 0.1, 1.0],
            vsync: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub variant: Variant,
    pub window: WindowConfig,
    pub assets: AssetConfig,
    pub render: RenderConfig,
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] in
    /// the working directory is used when present and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    log::debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;

        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
