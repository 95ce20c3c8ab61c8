//! Window manager backend trait definition.

use crate::window::{
    errors::WindowError,
    types::{WindowHandle, WindowProperties},
};

/// Interface to a window manager and its property inspector.
///
/// Only leaf windows (focusable, no further splits) are reported.
pub trait WindowBackend {
    /// The canonical name of this backend (e.g., "bspwm").
    fn name(&self) -> &'static str;

    /// Check that every program the backend shells out to is installed.
    fn ensure_available(&self) -> Result<(), WindowError>;

    /// Leaf windows in the manager's native enumeration order.
    fn list_leaf_windows(&self) -> Result<Vec<WindowHandle>, WindowError>;

    /// Read class, owning pid and title of one window in a single query.
    fn properties(&self, handle: &WindowHandle) -> Result<WindowProperties, WindowError>;

    /// Focus the window (side effect only).
    fn focus(&self, handle: &WindowHandle) -> Result<(), WindowError>;
}
