//! Menu store and handle layer.
//!
//! [`MenuStore`] owns the single process-wide menu state and is the only
//! mutation path: every change goes through [`MenuStore::dispatch`] and the
//! pure reducer. Hooks registered at `show` time are invoked after the
//! state transition commits and outside the state lock, so a hook may
//! dispatch follow-up actions without deadlocking.
//!
//! [`MenuManager`] and [`Menu`] sit on top of the store and are what UI and
//! integration callers use: the manager hands out menu handles with fresh
//! ids, and each handle exposes typed event channels for selection, filter
//! text, and hide notifications.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use plume_core::{Event, FilteredOption, MenuId, MenuOption};

use crate::action::MenuAction;
use crate::filter::{MenuFilter, SubstringFilter};
use crate::reducer::reduce;
use crate::state::MenuState;

// =============================================================================
// Hooks
// =============================================================================

/// Callback invoked when an item is selected.
pub type SelectHook = Arc<dyn Fn(&FilteredOption) + Send + Sync>;

/// Callback invoked when the menu is hidden.
pub type HideHook = Arc<dyn Fn() + Send + Sync>;

/// Callback invoked when the filter text changes.
pub type FilterTextHook = Arc<dyn Fn(&str) + Send + Sync>;

/// Callbacks registered with [`MenuStore::show`].
///
/// Hooks belong to the menu that registered them; hiding the menu drops
/// them, and a subsequent `show` replaces them wholesale.
#[derive(Default, Clone)]
pub struct MenuHooks {
    /// Invoked with the resolved option on selection, before the hide hook.
    pub on_select_item: Option<SelectHook>,

    /// Invoked once whenever the active menu is cleared.
    pub on_hide: Option<HideHook>,

    /// Invoked with the new text after a filter action applies.
    pub on_filter_text_changed: Option<FilterTextHook>,
}

impl MenuHooks {
    /// Create an empty hook set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection hook.
    pub fn on_select_item<F>(mut self, f: F) -> Self
    where
        F: Fn(&FilteredOption) + Send + Sync + 'static,
    {
        self.on_select_item = Some(Arc::new(f));
        self
    }

    /// Set the hide hook.
    pub fn on_hide<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_hide = Some(Arc::new(f));
        self
    }

    /// Set the filter text hook.
    pub fn on_filter_text_changed<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_filter_text_changed = Some(Arc::new(f));
        self
    }
}

impl std::fmt::Debug for MenuHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuHooks")
            .field("has_on_select_item", &self.on_select_item.is_some())
            .field("has_on_hide", &self.on_hide.is_some())
            .field(
                "has_on_filter_text_changed",
                &self.on_filter_text_changed.is_some(),
            )
            .finish()
    }
}

// =============================================================================
// Menu Store
// =============================================================================

/// The single store behind the popup menu.
///
/// The store is shared as an `Arc<MenuStore>` and passed down explicitly to
/// whoever needs to read snapshots or dispatch actions. State and hooks sit
/// behind separate locks; neither lock is held while user callbacks run.
pub struct MenuStore {
    state: Mutex<MenuState>,
    hooks: Mutex<MenuHooks>,
    filter: Arc<dyn MenuFilter>,
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new(Arc::new(SubstringFilter::new()))
    }
}

impl MenuStore {
    /// Create a store with the given filter implementation.
    pub fn new(filter: Arc<dyn MenuFilter>) -> Self {
        Self {
            state: Mutex::new(MenuState::default()),
            hooks: Mutex::new(MenuHooks::default()),
            filter,
        }
    }

    /// Activate a menu and register its hooks.
    ///
    /// The menu starts with no options; nothing is delivered to hooks until
    /// items or filter text arrive.
    pub fn show(&self, id: MenuId, hooks: MenuHooks) {
        tracing::debug!("Showing menu {}", id);
        *self.hooks.lock() = hooks;
        self.dispatch(MenuAction::Show { id });
    }

    /// Apply an action and fire the hooks it triggers.
    pub fn dispatch(&self, action: MenuAction) {
        let (hid, filter_text) = {
            let mut state = self.state.lock();
            let was_open = state.is_open();

            let filter_applied = match &action {
                MenuAction::Filter { id, text } => {
                    state.active_with_id(*id).map(|_| text.clone())
                }
                _ => None,
            };

            *state = reduce(std::mem::take(&mut *state), &action, self.filter.as_ref());

            let hid = was_open && matches!(action, MenuAction::Hide);
            (hid, filter_applied)
        };

        if let Some(text) = filter_text {
            let hook = self.hooks.lock().on_filter_text_changed.clone();
            if let Some(hook) = hook {
                hook(&text);
            }
        }

        if hid {
            // Hooks belong to the menu that just closed; drop them with it.
            let hooks = std::mem::take(&mut *self.hooks.lock());
            tracing::debug!("Menu hidden");
            if let Some(hook) = hooks.on_hide {
                hook();
            }
        }
    }

    /// Resolve the item at `idx` (or the current selection), invoke the
    /// select hook with it, then hide the menu.
    ///
    /// A no-op when no menu is open. An out-of-range index still closes the
    /// menu but delivers nothing.
    pub fn select_item(&self, idx: Option<usize>) {
        let selected = {
            let state = self.state.lock();
            let Some(menu) = state.active() else {
                return;
            };
            let index = idx.unwrap_or(menu.selected_index);
            menu.filtered.get(index).cloned()
        };

        if let Some(option) = selected {
            let hook = self.hooks.lock().on_select_item.clone();
            if let Some(hook) = hook {
                hook(&option);
            }
        }

        self.dispatch(MenuAction::Hide);
    }

    /// Clone the current state for renderers.
    pub fn snapshot(&self) -> MenuState {
        self.state.lock().clone()
    }

    /// Check if any menu is open.
    pub fn is_open(&self) -> bool {
        self.state.lock().is_open()
    }

    /// Check if the menu with the given id is open.
    pub fn is_open_id(&self, id: MenuId) -> bool {
        self.state.lock().active_with_id(id).is_some()
    }
}

// =============================================================================
// Menu Manager
// =============================================================================

/// Hands out menu handles and forwards global menu commands to the store.
pub struct MenuManager {
    store: Arc<MenuStore>,
    next_id: AtomicU64,
}

impl Default for MenuManager {
    fn default() -> Self {
        Self::new(Arc::new(MenuStore::default()))
    }
}

impl MenuManager {
    /// Create a manager over an existing store.
    pub fn new(store: Arc<MenuStore>) -> Self {
        Self {
            store,
            next_id: AtomicU64::new(1),
        }
    }

    /// Get the shared store.
    pub fn store(&self) -> &Arc<MenuStore> {
        &self.store
    }

    /// Create a menu handle with a fresh id.
    pub fn create(&self) -> Menu {
        let id = MenuId(self.next_id.fetch_add(1, Ordering::Relaxed));
        Menu::new(id, self.store.clone())
    }

    /// Check if any menu is open.
    pub fn is_menu_open(&self) -> bool {
        self.store.is_open()
    }

    /// Move selection down in the active menu.
    pub fn next_menu_item(&self) {
        self.store.dispatch(MenuAction::Next);
    }

    /// Move selection up in the active menu.
    pub fn previous_menu_item(&self) {
        self.store.dispatch(MenuAction::Previous);
    }

    /// Close the active menu, if any.
    pub fn close_active_menu(&self) {
        self.store.dispatch(MenuAction::Hide);
    }

    /// Select the item at `idx` (or the current selection) in the active menu.
    pub fn select_menu_item(&self, idx: Option<usize>) {
        self.store.select_item(idx);
    }
}

// =============================================================================
// Menu Handle
// =============================================================================

/// A handle to one popup menu instance.
///
/// The handle owns the menu's event channels; `show` wires them into the
/// store's hooks so selection, filter, and hide notifications arrive on the
/// channels regardless of which path (store, manager, or handle) drove the
/// change.
pub struct Menu {
    id: MenuId,
    store: Arc<MenuStore>,
    on_item_selected: Event<FilteredOption>,
    on_filter_text_changed: Event<String>,
    on_hide: Event<()>,
}

impl Menu {
    fn new(id: MenuId, store: Arc<MenuStore>) -> Self {
        Self {
            id,
            store,
            on_item_selected: Event::new(),
            on_filter_text_changed: Event::new(),
            on_hide: Event::new(),
        }
    }

    /// This menu's id.
    pub fn id(&self) -> MenuId {
        self.id
    }

    /// Channel fired with the resolved option on selection.
    pub fn on_item_selected(&self) -> &Event<FilteredOption> {
        &self.on_item_selected
    }

    /// Channel fired when the filter text changes.
    pub fn on_filter_text_changed(&self) -> &Event<String> {
        &self.on_filter_text_changed
    }

    /// Channel fired when the menu is hidden.
    pub fn on_hide(&self) -> &Event<()> {
        &self.on_hide
    }

    /// Show this menu, replacing any currently active menu.
    pub fn show(&self) {
        let selected = self.on_item_selected.clone();
        let filter_changed = self.on_filter_text_changed.clone();
        let hidden = self.on_hide.clone();

        let hooks = MenuHooks::new()
            .on_select_item(move |option| selected.dispatch(option))
            .on_filter_text_changed(move |text| filter_changed.dispatch(&text.to_string()))
            .on_hide(move || hidden.dispatch(&()));

        self.store.show(self.id, hooks);
    }

    /// Hide the active menu.
    pub fn hide(&self) {
        self.store.dispatch(MenuAction::Hide);
    }

    /// Check whether this particular menu is the open one.
    pub fn is_open(&self) -> bool {
        self.store.is_open_id(self.id)
    }

    /// Replace the option list.
    pub fn set_items(&self, items: Vec<MenuOption>) {
        self.store.dispatch(MenuAction::SetItems {
            id: self.id,
            items,
        });
    }

    /// Toggle the loading indicator.
    pub fn set_loading(&self, is_loading: bool) {
        self.store.dispatch(MenuAction::SetLoading {
            id: self.id,
            is_loading,
        });
    }

    /// Change the filter text.
    pub fn filter(&self, text: impl Into<String>) {
        self.store.dispatch(MenuAction::Filter {
            id: self.id,
            text: text.into(),
        });
    }

    /// Get the currently selected filtered option, if this menu is open.
    pub fn selected_item(&self) -> Option<FilteredOption> {
        let state = self.store.snapshot();
        let menu = state.active_with_id(self.id)?;
        menu.selected_option().cloned()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex as PlMutex;

    fn items() -> Vec<MenuOption> {
        vec![
            MenuOption::new("alpha"),
            MenuOption::new("beta"),
            MenuOption::new("gamma"),
        ]
    }

    #[test]
    fn test_show_then_set_items() {
        let manager = MenuManager::default();
        let menu = manager.create();

        menu.show();
        assert!(menu.is_open());
        assert!(manager.is_menu_open());

        menu.set_items(items());
        let state = manager.store().snapshot();
        assert_eq!(state.active().unwrap().filtered.len(), 3);
    }

    #[test]
    fn test_second_show_replaces_first() {
        let manager = MenuManager::default();
        let first = manager.create();
        let second = manager.create();

        first.show();
        second.show();

        assert!(!first.is_open());
        assert!(second.is_open());
    }

    #[test]
    fn test_set_items_on_closed_menu_is_noop() {
        let manager = MenuManager::default();
        let menu = manager.create();

        menu.set_items(items());
        assert!(!manager.is_menu_open());
    }

    #[test]
    fn test_hide_fires_hide_channel_once() {
        let manager = MenuManager::default();
        let menu = manager.create();

        let hides = Arc::new(AtomicU64::new(0));
        let hides_clone = hides.clone();
        menu.on_hide().subscribe(move |_| {
            hides_clone.fetch_add(1, Ordering::Relaxed);
        });

        menu.show();
        menu.hide();
        // Hiding again with nothing open must not re-fire
        menu.hide();

        assert_eq!(hides.load(Ordering::Relaxed), 1);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_filter_fires_text_channel() {
        let manager = MenuManager::default();
        let menu = manager.create();

        let texts = Arc::new(PlMutex::new(Vec::new()));
        let texts_clone = texts.clone();
        menu.on_filter_text_changed().subscribe(move |text| {
            texts_clone.lock().push(text.clone());
        });

        menu.show();
        menu.set_items(items());
        menu.filter("al");

        assert_eq!(*texts.lock(), vec!["al".to_string()]);
        let state = manager.store().snapshot();
        assert_eq!(state.active().unwrap().filtered.len(), 1);
    }

    #[test]
    fn test_filter_with_wrong_id_fires_nothing() {
        let manager = MenuManager::default();
        let open = manager.create();
        let closed = manager.create();

        let texts = Arc::new(AtomicU64::new(0));
        let texts_clone = texts.clone();
        closed.on_filter_text_changed().subscribe(move |_| {
            texts_clone.fetch_add(1, Ordering::Relaxed);
        });

        open.show();
        closed.filter("x");

        assert_eq!(texts.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_select_item_delivers_then_hides() {
        let manager = MenuManager::default();
        let menu = manager.create();

        let selected = Arc::new(PlMutex::new(Vec::new()));
        let selected_clone = selected.clone();
        menu.on_item_selected().subscribe(move |option| {
            selected_clone.lock().push(option.option.label.clone());
        });

        menu.show();
        menu.set_items(items());
        manager.next_menu_item();
        manager.select_menu_item(None);

        assert_eq!(*selected.lock(), vec!["beta".to_string()]);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_select_item_with_explicit_index() {
        let manager = MenuManager::default();
        let menu = manager.create();

        let selected = Arc::new(PlMutex::new(Vec::new()));
        let selected_clone = selected.clone();
        menu.on_item_selected().subscribe(move |option| {
            selected_clone.lock().push(option.option.label.clone());
        });

        menu.show();
        menu.set_items(items());
        manager.select_menu_item(Some(2));

        assert_eq!(*selected.lock(), vec!["gamma".to_string()]);
    }

    #[test]
    fn test_select_item_out_of_range_hides_without_delivery() {
        let manager = MenuManager::default();
        let menu = manager.create();

        let selections = Arc::new(AtomicU64::new(0));
        let selections_clone = selections.clone();
        menu.on_item_selected().subscribe(move |_| {
            selections_clone.fetch_add(1, Ordering::Relaxed);
        });

        menu.show();
        menu.set_items(items());
        manager.select_menu_item(Some(99));

        assert_eq!(selections.load(Ordering::Relaxed), 0);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_select_item_without_menu_is_noop() {
        let manager = MenuManager::default();
        // Must not panic or fire anything
        manager.select_menu_item(None);
        manager.select_menu_item(Some(0));
        assert!(!manager.is_menu_open());
    }

    #[test]
    fn test_manager_navigation_wraps() {
        let manager = MenuManager::default();
        let menu = manager.create();

        menu.show();
        menu.set_items(items());

        manager.previous_menu_item();
        assert_eq!(menu.selected_item().unwrap().option.label, "gamma");

        manager.next_menu_item();
        assert_eq!(menu.selected_item().unwrap().option.label, "alpha");
    }

    #[test]
    fn test_hide_hook_may_redispatch() {
        // A hide hook that immediately re-opens a menu must not deadlock.
        let store = Arc::new(MenuStore::default());
        let store_clone = store.clone();

        store.show(
            MenuId(1),
            MenuHooks::new().on_hide(move || {
                store_clone.show(MenuId(2), MenuHooks::new());
            }),
        );
        store.dispatch(MenuAction::Hide);

        assert!(store.is_open_id(MenuId(2)));
    }

    #[test]
    fn test_close_active_menu() {
        let manager = MenuManager::default();
        let menu = manager.create();

        menu.show();
        manager.close_active_menu();
        assert!(!manager.is_menu_open());
    }
}
