//! Core types for the Plume editor shell.
//!
//! This crate contains shared data structures that are used across all Plume crates:
//! - Menu option types for popup menus
//! - Typed event channels
//! - Configuration types
//! - Error types

mod config;
mod error;
mod event;
mod option;

pub use config::{
    config_dir, config_path, ensure_config_dir, load_config, AppConfig, EditorConfig, MenuConfig,
};
pub use error::{ConfigError, NvimError};
pub use event::{Event, Subscription};
pub use option::{FilteredOption, MenuId, MenuOption};
