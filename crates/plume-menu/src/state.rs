//! Menu state model.
//!
//! At most one popup menu is active at a time. Invalid states are
//! impossible: selection bounds are re-clamped on every mutation that can
//! shrink the filtered list.

use plume_core::{FilteredOption, MenuId, MenuOption};

/// Snapshot of the menu store, handed to renderers.
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    /// The active menu, if any.
    pub active: Option<ActiveMenu>,
}

impl MenuState {
    /// Get the active menu if one is open.
    pub fn active(&self) -> Option<&ActiveMenu> {
        self.active.as_ref()
    }

    /// Get mutable active menu if one is open.
    pub fn active_mut(&mut self) -> Option<&mut ActiveMenu> {
        self.active.as_mut()
    }

    /// Get the active menu only if it carries the given id.
    pub fn active_with_id(&self, id: MenuId) -> Option<&ActiveMenu> {
        self.active().filter(|m| m.id == id)
    }

    /// Get mutable active menu only if it carries the given id.
    pub fn active_with_id_mut(&mut self, id: MenuId) -> Option<&mut ActiveMenu> {
        self.active_mut().filter(|m| m.id == id)
    }

    /// Check if any menu is open.
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }
}

/// State of the currently visible popup menu.
#[derive(Debug, Clone)]
pub struct ActiveMenu {
    /// Identifier of the menu instance this state belongs to.
    pub id: MenuId,

    /// Full option list, as last set by the owner.
    pub options: Vec<MenuOption>,

    /// Options that pass the current filter, in display order.
    pub filtered: Vec<FilteredOption>,

    /// Index into `filtered` of the highlighted row.
    pub selected_index: usize,

    /// Whether the owner is still producing options.
    pub is_loading: bool,

    /// Current filter text.
    pub filter: String,
}

impl ActiveMenu {
    /// Create a freshly shown menu with no options yet.
    pub fn new(id: MenuId) -> Self {
        Self {
            id,
            options: Vec::new(),
            filtered: Vec::new(),
            selected_index: 0,
            is_loading: false,
            filter: String::new(),
        }
    }

    /// Get the filtered option at the selection.
    pub fn selected_option(&self) -> Option<&FilteredOption> {
        self.filtered.get(self.selected_index)
    }

    /// Move selection down one row, wrapping at the end.
    pub fn select_next(&mut self) {
        if self.filtered.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = (self.selected_index + 1) % self.filtered.len();
        }
    }

    /// Move selection up one row, wrapping at the start.
    pub fn select_previous(&mut self) {
        if self.filtered.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index == 0 {
            self.selected_index = self.filtered.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Clamp selection to valid range after the filtered list changed.
    pub fn clamp_selection(&mut self) {
        if self.selected_index >= self.filtered.len() {
            self.selected_index = self.filtered.len().saturating_sub(1);
        }
    }
}
