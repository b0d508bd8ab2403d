//! Menu option types for popup menus.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a popup menu instance.
///
/// Ids are handed out monotonically by the menu manager; two menus never
/// share an id within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuId(pub u64);

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "menu:{}", self.0)
    }
}

/// An option is the atomic unit of a popup menu.
///
/// Everything users filter, navigate, and select in a menu is an option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuOption {
    /// Primary display text.
    pub label: String,

    /// Secondary display text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Icon identifier (path, glyph, or named icon).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Pinned options sort before unpinned ones in renderers.
    #[serde(default)]
    pub pinned: bool,

    /// Arbitrary data for selection handlers to consume.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl MenuOption {
    /// Create a new option with required fields.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: None,
            icon: None,
            pinned: false,
            metadata: None,
        }
    }

    /// Set the secondary display text.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the icon identifier.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Mark the option as pinned.
    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }
}

/// A menu option that passed the active filter, with match highlights.
///
/// Highlight entries are character indices into the label and detail text,
/// produced by whichever filter implementation is wired into the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredOption {
    /// The underlying option.
    pub option: MenuOption,

    /// Matched character indices in the label.
    #[serde(default)]
    pub label_highlights: Vec<usize>,

    /// Matched character indices in the detail text.
    #[serde(default)]
    pub detail_highlights: Vec<usize>,
}

impl FilteredOption {
    /// Wrap an option that matched with no highlight information.
    pub fn unhighlighted(option: MenuOption) -> Self {
        Self {
            option,
            label_highlights: Vec::new(),
            detail_highlights: Vec::new(),
        }
    }
}
