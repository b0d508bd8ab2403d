//! Strongly typed interface to Neovim's autocommands.
//!
//! To add a new autocommand, make sure it is registered in the shell's
//! init.vim listener augroup, then add a channel here.

use std::collections::HashMap;
use std::sync::Arc;

use plume_core::{Event, NvimError};

use crate::api::NvimApi;
use crate::context::EventContext;

/// Typed channels for the editor lifecycle events the shell listens to.
///
/// The name-to-channel map is built once at construction and never mutated
/// afterwards; [`notify`](AutoCommands::notify) is a lookup plus a
/// synchronous dispatch.
pub struct AutoCommands {
    nvim: Arc<dyn NvimApi>,
    name_to_event: HashMap<&'static str, Event<EventContext>>,

    on_buf_enter: Event<EventContext>,
    on_buf_win_enter: Event<EventContext>,
    on_win_enter: Event<EventContext>,
    on_cursor_moved: Event<EventContext>,
    on_cursor_moved_i: Event<EventContext>,
    on_vim_resized: Event<EventContext>,
}

impl AutoCommands {
    /// Build the channel set over the given editor seam.
    pub fn new(nvim: Arc<dyn NvimApi>) -> Self {
        let on_buf_enter = Event::new();
        let on_buf_win_enter = Event::new();
        let on_win_enter = Event::new();
        let on_cursor_moved = Event::new();
        let on_cursor_moved_i = Event::new();
        let on_vim_resized = Event::new();

        let name_to_event = HashMap::from([
            ("BufEnter", on_buf_enter.clone()),
            ("BufWinEnter", on_buf_win_enter.clone()),
            ("WinEnter", on_win_enter.clone()),
            ("CursorMoved", on_cursor_moved.clone()),
            ("CursorMovedI", on_cursor_moved_i.clone()),
            ("VimResized", on_vim_resized.clone()),
        ]);

        Self {
            nvim,
            name_to_event,
            on_buf_enter,
            on_buf_win_enter,
            on_win_enter,
            on_cursor_moved,
            on_cursor_moved_i,
            on_vim_resized,
        }
    }

    /// Fired when a buffer becomes the current buffer.
    pub fn on_buf_enter(&self) -> &Event<EventContext> {
        &self.on_buf_enter
    }

    /// Fired when a buffer is displayed in a window.
    pub fn on_buf_win_enter(&self) -> &Event<EventContext> {
        &self.on_buf_win_enter
    }

    /// Fired when the cursor enters another window.
    pub fn on_win_enter(&self) -> &Event<EventContext> {
        &self.on_win_enter
    }

    /// Fired when the cursor moves in normal mode.
    pub fn on_cursor_moved(&self) -> &Event<EventContext> {
        &self.on_cursor_moved
    }

    /// Fired when the cursor moves in insert mode.
    pub fn on_cursor_moved_i(&self) -> &Event<EventContext> {
        &self.on_cursor_moved_i
    }

    /// Fired when the editor reports a resize.
    pub fn on_vim_resized(&self) -> &Event<EventContext> {
        &self.on_vim_resized
    }

    /// Deliver a notification from the editor to all subscribers of the
    /// named event, synchronously.
    ///
    /// Names without a channel are ignored; the editor may be configured to
    /// forward more events than this build knows about.
    pub fn notify(&self, name: &str, context: &EventContext) {
        let Some(event) = self.name_to_event.get(name) else {
            tracing::trace!("Ignoring unknown autocommand '{}'", name);
            return;
        };
        event.dispatch(context);
    }

    /// Ask the editor whether the named autocommand group exists and, only
    /// if it does, fire it.
    ///
    /// Errors from either round-trip propagate to the caller.
    pub async fn execute_auto_command(&self, auto_command: &str) -> Result<(), NvimError> {
        let exists = self
            .nvim
            .eval(&format!("exists('#{auto_command}')"))
            .await?;

        if is_truthy(&exists) {
            self.nvim
                .command(&format!("doautocmd <nomodeline> {auto_command}"))
                .await?;
        }

        Ok(())
    }
}

/// Vim truthiness for eval results: `exists()` answers with a number, but
/// some transports hand it back as a bool or a numeric string.
fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        serde_json::Value::String(s) => !matches!(s.as_str(), "" | "0"),
        _ => false,
    }
}
