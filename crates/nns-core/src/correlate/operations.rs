use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use tracing::{debug, info};

use crate::process::{ChildLister, Pid, descendants};
use crate::window::{WindowHandle, WindowInventory};

/// Resolves host windows against one window snapshot and one process source.
///
/// Descendant sets are computed at most once per terminal window, so
/// resolving several editor instances does not re-walk the same trees.
pub struct Correlator<'a> {
    windows: &'a WindowInventory<'a>,
    lister: &'a dyn ChildLister,
    terminal_class: String,
    trees: RefCell<HashMap<WindowHandle, BTreeSet<Pid>>>,
}

impl<'a> Correlator<'a> {
    pub fn new(
        windows: &'a WindowInventory<'a>,
        lister: &'a dyn ChildLister,
        terminal_class: impl Into<String>,
    ) -> Self {
        Self {
            windows,
            lister,
            terminal_class: terminal_class.into(),
            trees: RefCell::new(HashMap::new()),
        }
    }

    /// Whether the window's class identifies it as the terminal emulator.
    pub fn is_terminal(&self, handle: &WindowHandle) -> bool {
        self.windows
            .class_name(handle)
            .is_some_and(|class| class.contains(&self.terminal_class))
    }

    /// Descendants of the window's owning process, or `None` when the
    /// owner is unknown.
    fn window_tree(&self, handle: &WindowHandle) -> Option<BTreeSet<Pid>> {
        if let Some(tree) = self.trees.borrow().get(handle) {
            return Some(tree.clone());
        }

        let owner = self.windows.owner_pid(handle)?;
        let tree = descendants(self.lister, owner);
        self.trees.borrow_mut().insert(handle.clone(), tree.clone());
        Some(tree)
    }

    /// First terminal window among `candidates` whose process tree contains `target`.
    pub fn host_window_among(
        &self,
        target: Pid,
        candidates: &[WindowHandle],
    ) -> Option<WindowHandle> {
        for handle in candidates {
            if !self.is_terminal(handle) {
                continue;
            }

            let Some(tree) = self.window_tree(handle) else {
                debug!(
                    event = "core.correlate.owner_unknown",
                    window = %handle
                );
                continue;
            };

            if tree.contains(&target) {
                info!(
                    event = "core.correlate.host_found",
                    pid = target.as_u32(),
                    window = %handle
                );
                return Some(handle.clone());
            }
        }

        debug!(event = "core.correlate.host_not_found", pid = target.as_u32());
        None
    }

    /// First terminal window in the snapshot hosting `target`.
    pub fn host_window(&self, target: Pid) -> Option<WindowHandle> {
        self.host_window_among(target, self.windows.windows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessTable;
    use crate::window::inventory::mock::MockWindows;

    fn pid(n: u32) -> Pid {
        Pid::from_raw(n)
    }

    fn table(pairs: &[(u32, u32)]) -> ProcessTable {
        ProcessTable::from_parent_pairs(pairs.iter().map(|&(p, c)| (pid(p), pid(c))))
    }

    #[test]
    fn test_finds_terminal_hosting_pid() {
        let backend = MockWindows::default()
            .with_window("0xA", "firefox", Some(50), "web")
            .with_window("0xW", "kitty", Some(100), "shell");
        let inventory = WindowInventory::snapshot(&backend).unwrap();
        let processes = table(&[(100, 200), (200, 300), (50, 51)]);
        let correlator = Correlator::new(&inventory, &processes, "kitty");

        assert_eq!(correlator.host_window(pid(300)), Some(WindowHandle::new("0xW")));
    }

    #[test]
    fn test_no_terminal_windows_means_none() {
        let backend = MockWindows::default().with_window("0xA", "firefox", Some(100), "web");
        let inventory = WindowInventory::snapshot(&backend).unwrap();
        let processes = table(&[(100, 300)]);
        let correlator = Correlator::new(&inventory, &processes, "kitty");

        // firefox's tree contains 300, but it is not a terminal
        assert_eq!(correlator.host_window(pid(300)), None);
    }

    #[test]
    fn test_pid_outside_any_terminal() {
        let backend = MockWindows::default().with_window("0xW", "kitty", Some(100), "shell");
        let inventory = WindowInventory::snapshot(&backend).unwrap();
        let processes = table(&[(100, 200)]);
        let correlator = Correlator::new(&inventory, &processes, "kitty");

        assert_eq!(correlator.host_window(pid(999)), None);
    }

    #[test]
    fn test_owner_pid_itself_is_not_hosted() {
        let backend = MockWindows::default().with_window("0xW", "kitty", Some(100), "shell");
        let inventory = WindowInventory::snapshot(&backend).unwrap();
        let processes = table(&[(100, 200)]);
        let correlator = Correlator::new(&inventory, &processes, "kitty");

        assert_eq!(correlator.host_window(pid(100)), None);
    }

    #[test]
    fn test_first_match_in_enumeration_order_wins() {
        let backend = MockWindows::default()
            .with_window("0x1", "kitty", Some(100), "one")
            .with_window("0x2", "kitty", Some(101), "two");
        let inventory = WindowInventory::snapshot(&backend).unwrap();
        // 300 is reachable from both owners (not a real tree, but must not break)
        let processes = table(&[(100, 300), (101, 300)]);
        let correlator = Correlator::new(&inventory, &processes, "kitty");

        assert_eq!(correlator.host_window(pid(300)), Some(WindowHandle::new("0x1")));
    }

    #[test]
    fn test_window_with_unknown_owner_is_skipped() {
        let backend = MockWindows::default()
            .with_window("0x1", "kitty", None, "no pid")
            .with_window("0x2", "kitty", Some(100), "shell");
        let inventory = WindowInventory::snapshot(&backend).unwrap();
        let processes = table(&[(100, 300)]);
        let correlator = Correlator::new(&inventory, &processes, "kitty");

        assert_eq!(correlator.host_window(pid(300)), Some(WindowHandle::new("0x2")));
    }

    #[test]
    fn test_deterministic_and_cached() {
        let backend = MockWindows::default().with_window("0xW", "kitty", Some(100), "shell");
        let inventory = WindowInventory::snapshot(&backend).unwrap();
        let processes = table(&[(100, 300)]);
        let correlator = Correlator::new(&inventory, &processes, "kitty");

        let first = correlator.host_window(pid(300));
        let second = correlator.host_window(pid(300));
        assert_eq!(first, second);
        assert_eq!(backend.property_queries.get(), 1);
    }

    #[test]
    fn test_host_window_among_restricts_candidates() {
        let backend = MockWindows::default().with_window("0xW", "kitty", Some(100), "shell");
        let inventory = WindowInventory::snapshot(&backend).unwrap();
        let processes = table(&[(100, 300)]);
        let correlator = Correlator::new(&inventory, &processes, "kitty");

        assert_eq!(correlator.host_window_among(pid(300), &[]), None);
    }
}
