//! Configuration types.
//!
//! Runtime configuration is read from `plume.toml` in the platform config
//! directory. Every field has a default so a missing or partial file is
//! never an error.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration for the shell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Popup menu settings
    #[serde(default)]
    pub menu: MenuConfig,

    /// Embedded editor settings
    #[serde(default)]
    pub editor: EditorConfig,
}

/// Popup menu settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Maximum rows visible before the menu scrolls.
    pub max_visible_rows: usize,

    /// Whether filtering is case sensitive.
    pub case_sensitive: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            max_visible_rows: 10,
            case_sensitive: false,
        }
    }
}

/// Embedded editor settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Binary to launch, e.g., "nvim".
    pub program: String,

    /// Autocommand group the shell listens on; must match the group
    /// registered in the bundled init.vim.
    pub autocmd_group: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            program: "nvim".to_string(),
            autocmd_group: "PlumeEventListeners".to_string(),
        }
    }
}

/// Get the path to plume.toml.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("plume/plume.toml"))
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("plume"))
}

/// Ensure the config directory exists.
pub fn ensure_config_dir() -> std::io::Result<()> {
    if let Some(dir) = config_dir() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Load configuration from plume.toml.
///
/// A missing file yields the defaults; a malformed file is an error.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;

    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io(e.to_string()))?;
    toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
}
