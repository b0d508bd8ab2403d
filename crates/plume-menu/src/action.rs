//! Menu actions.
//!
//! The store is mutated exclusively through this fixed action set. Actions
//! carrying a [`MenuId`] are no-ops when the id does not match the active
//! menu.

use plume_core::{MenuId, MenuOption};

/// An action dispatched to the menu store.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    /// Activate a menu with empty options.
    Show { id: MenuId },

    /// Replace the full option list and recompute the filtered subset.
    SetItems { id: MenuId, items: Vec<MenuOption> },

    /// Toggle the loading indicator.
    SetLoading { id: MenuId, is_loading: bool },

    /// Change the filter text and recompute the filtered subset.
    Filter { id: MenuId, text: String },

    /// Clear the active menu.
    Hide,

    /// Move selection down, wrapping at the end.
    Next,

    /// Move selection up, wrapping at the start.
    Previous,
}
