//! bspwm backend: `bspc` for the node tree, `xprop` for window properties.

use tracing::{debug, info};

use crate::command::{CommandError, run_capture, run_status};
use crate::window::{
    errors::WindowError,
    traits::WindowBackend,
    types::{WindowHandle, WindowProperties},
    xprop,
};

const BSPC: &str = "bspc";
const XPROP: &str = "xprop";

/// Backend implementation for bspwm.
#[derive(Debug, Clone, Default)]
pub struct BspwmBackend;

/// One node id per line; blank lines are dropped.
fn parse_node_ids(output: &str) -> Vec<WindowHandle> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(WindowHandle::new)
        .collect()
}

impl WindowBackend for BspwmBackend {
    fn name(&self) -> &'static str {
        "bspwm"
    }

    fn ensure_available(&self) -> Result<(), WindowError> {
        for binary in [BSPC, XPROP] {
            if which::which(binary).is_err() {
                return Err(WindowError::BackendUnavailable {
                    backend: self.name(),
                    binary,
                });
            }
        }
        Ok(())
    }

    fn list_leaf_windows(&self) -> Result<Vec<WindowHandle>, WindowError> {
        match run_capture(BSPC, &["query", "-N", "-n", ".leaf"]) {
            Ok(output) => {
                let windows = parse_node_ids(&output);
                info!(
                    event = "core.window.list_completed",
                    backend = self.name(),
                    count = windows.len()
                );
                Ok(windows)
            }
            // bspc exits non-zero with no output when the selector matched nothing
            Err(CommandError::Failed { ref stderr, .. }) if stderr.is_empty() => {
                debug!(event = "core.window.list_empty", backend = self.name());
                Ok(Vec::new())
            }
            Err(source) => Err(WindowError::ListFailed { source }),
        }
    }

    fn properties(&self, handle: &WindowHandle) -> Result<WindowProperties, WindowError> {
        let output = run_capture(XPROP, &["-id", handle.as_str()]).map_err(|source| {
            WindowError::PropertyQueryFailed {
                id: handle.to_string(),
                source,
            }
        })?;
        Ok(xprop::parse_properties(&output))
    }

    fn focus(&self, handle: &WindowHandle) -> Result<(), WindowError> {
        run_status(BSPC, &["node", handle.as_str(), "--focus"]).map_err(|source| {
            WindowError::FocusFailed {
                id: handle.to_string(),
                source,
            }
        })?;
        info!(
            event = "core.window.focus_completed",
            backend = self.name(),
            window = %handle
        );
        Ok(())
    }
}
