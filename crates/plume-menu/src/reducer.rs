//! Pure reducer for menu state.
//!
//! Every state transition of the menu store goes through [`reduce`]. The
//! filter seam is passed in so the reducer itself stays free of matching
//! policy.

use crate::action::MenuAction;
use crate::filter::MenuFilter;
use crate::state::{ActiveMenu, MenuState};

/// Apply an action to the state, producing the next state.
///
/// Actions addressed to a menu id that is not the active one leave the
/// state untouched.
pub fn reduce(mut state: MenuState, action: &MenuAction, filter: &dyn MenuFilter) -> MenuState {
    match action {
        MenuAction::Show { id } => {
            // Showing replaces whatever was active before.
            state.active = Some(ActiveMenu::new(*id));
        }
        MenuAction::SetItems { id, items } => {
            if let Some(menu) = state.active_with_id_mut(*id) {
                menu.options = items.clone();
                menu.filtered = filter.filter(&menu.options, &menu.filter);
                menu.clamp_selection();
            }
        }
        MenuAction::SetLoading { id, is_loading } => {
            if let Some(menu) = state.active_with_id_mut(*id) {
                menu.is_loading = *is_loading;
            }
        }
        MenuAction::Filter { id, text } => {
            if let Some(menu) = state.active_with_id_mut(*id) {
                menu.filter = text.clone();
                menu.filtered = filter.filter(&menu.options, text);
                menu.selected_index = 0;
            }
        }
        MenuAction::Hide => {
            state.active = None;
        }
        MenuAction::Next => {
            if let Some(menu) = state.active_mut() {
                menu.select_next();
            }
        }
        MenuAction::Previous => {
            if let Some(menu) = state.active_mut() {
                menu.select_previous();
            }
        }
    }
    state
}
