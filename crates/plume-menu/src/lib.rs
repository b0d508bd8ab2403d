//! Popup menu state store for the Plume editor shell.
//!
//! This crate implements the menu/command-palette widget state:
//! - A single store holding at most one active menu
//! - A fixed action set and a pure reducer over it
//! - A pluggable filter seam for matching options against typed text
//! - A `MenuManager`/`Menu` handle layer for UI and integration callers
//!
//! Rendering is out of scope; renderers read [`MenuState`] snapshots and
//! dispatch actions through the store.

mod action;
mod filter;
mod reducer;
mod state;
mod store;

pub use action::MenuAction;
pub use filter::{MenuFilter, SubstringFilter};
pub use reducer::reduce;
pub use state::{ActiveMenu, MenuState};
pub use store::{Menu, MenuHooks, MenuManager, MenuStore};

// Re-export plume_core types for convenience
pub use plume_core::{FilteredOption, MenuId, MenuOption};
