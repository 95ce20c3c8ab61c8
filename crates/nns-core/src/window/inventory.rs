use std::cell::RefCell;
use std::collections::HashMap;

use tracing::debug;

use crate::process::Pid;
use crate::window::{
    errors::WindowError,
    traits::WindowBackend,
    types::{WindowHandle, WindowProperties},
};

/// Snapshot of the leaf windows plus lazily fetched, memoized properties.
///
/// Each window's properties are queried at most once per snapshot. A failed
/// query (window closed meanwhile, property missing) is remembered as
/// "all unknown" so the window stays listed but is never correlated.
pub struct WindowInventory<'a> {
    backend: &'a dyn WindowBackend,
    windows: Vec<WindowHandle>,
    properties: RefCell<HashMap<WindowHandle, WindowProperties>>,
}

impl<'a> WindowInventory<'a> {
    pub fn snapshot(backend: &'a dyn WindowBackend) -> Result<Self, WindowError> {
        let windows = backend.list_leaf_windows()?;
        Ok(Self::from_windows(backend, windows))
    }

    pub fn from_windows(backend: &'a dyn WindowBackend, windows: Vec<WindowHandle>) -> Self {
        Self {
            backend,
            windows,
            properties: RefCell::new(HashMap::new()),
        }
    }

    /// Leaf windows in enumeration order.
    pub fn windows(&self) -> &[WindowHandle] {
        &self.windows
    }

    pub fn properties(&self, handle: &WindowHandle) -> WindowProperties {
        if let Some(cached) = self.properties.borrow().get(handle) {
            return cached.clone();
        }

        let props = match self.backend.properties(handle) {
            Ok(props) => props,
            Err(e) => {
                debug!(
                    event = "core.window.properties_unavailable",
                    window = %handle,
                    error = %e
                );
                WindowProperties::default()
            }
        };

        self.properties
            .borrow_mut()
            .insert(handle.clone(), props.clone());
        props
    }

    pub fn class_name(&self, handle: &WindowHandle) -> Option<String> {
        self.properties(handle).class_name()
    }

    pub fn owner_pid(&self, handle: &WindowHandle) -> Option<Pid> {
        self.properties(handle).pid
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockWindows;
    use super::*;

    #[test]
    fn test_properties_are_memoized() {
        let backend = MockWindows::default().with_window("0x1", "kitty", Some(100), "shell");
        let inventory = WindowInventory::snapshot(&backend).unwrap();
        let handle = WindowHandle::new("0x1");

        assert_eq!(inventory.owner_pid(&handle), Some(Pid::from_raw(100)));
        assert_eq!(inventory.class_name(&handle).as_deref(), Some("kitty kitty"));
        assert_eq!(backend.property_queries.get(), 1);
    }

    #[test]
    fn test_failed_query_is_unknown_but_window_stays_listed() {
        let backend = MockWindows {
            windows: vec![WindowHandle::new("0xdead")],
            ..Default::default()
        };
        let inventory = WindowInventory::snapshot(&backend).unwrap();
        let handle = WindowHandle::new("0xdead");

        assert!(inventory.class_name(&handle).is_none());
        assert!(inventory.owner_pid(&handle).is_none());
        assert_eq!(inventory.windows().len(), 1);
        assert_eq!(backend.property_queries.get(), 1);
    }
}
