use serde::Serialize;
use tracing::{info, warn};

use crate::dispatch::errors::DispatchError;
use crate::editor::EditorBackend;
use crate::menu::{Menu, sanitize_selection};
use crate::window::{WindowBackend, WindowHandle};

/// Focus actions that were carried out for a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DispatchOutcome {
    pub window_focused: Option<WindowHandle>,
    /// `(server, buffer)` the editor was told to show.
    pub buffer_focused: Option<(String, String)>,
}

impl DispatchOutcome {
    pub fn is_noop(&self) -> bool {
        self.window_focused.is_none() && self.buffer_focused.is_none()
    }
}

/// Act on a picker selection.
///
/// Unknown, empty or cancelled selections are a no-op. The window focus (if
/// the entry has a window) and the editor focus (if it has a server) are
/// independent: one failing does not skip the other. An error is returned
/// only when every attempted action failed.
pub fn dispatch(
    selection: &str,
    menu: &Menu,
    windows: &dyn WindowBackend,
    editor: &dyn EditorBackend,
) -> Result<DispatchOutcome, DispatchError> {
    let mut outcome = DispatchOutcome::default();

    let Some(metadata) = menu.lookup(selection) else {
        info!(
            event = "core.dispatch.no_selection",
            selection = %sanitize_selection(selection)
        );
        return Ok(outcome);
    };

    let mut first_error: Option<DispatchError> = None;

    if let Some(window) = &metadata.window {
        match windows.focus(window) {
            Ok(()) => outcome.window_focused = Some(window.clone()),
            Err(e) => {
                warn!(event = "core.dispatch.window_focus_failed", window = %window, error = %e);
                first_error.get_or_insert(e.into());
            }
        }
    }

    if let Some(server) = &metadata.editor_server {
        let buffer = metadata
            .buffer
            .clone()
            .unwrap_or_else(|| sanitize_selection(selection));
        match editor.focus_buffer(server, &buffer) {
            Ok(()) => outcome.buffer_focused = Some((server.clone(), buffer)),
            Err(e) => {
                warn!(event = "core.dispatch.buffer_focus_failed", server = %server, error = %e);
                first_error.get_or_insert(e.into());
            }
        }
    }

    match first_error {
        Some(e) if outcome.is_noop() => Err(e),
        _ => {
            info!(
                event = "core.dispatch.completed",
                window = ?outcome.window_focused,
                buffer = ?outcome.buffer_focused
            );
            Ok(outcome)
        }
    }
}
