//! One snapshot-and-act cycle: inventory, correlation, menu, picker, dispatch.

use tracing::{info, warn};

use crate::config::NnsConfig;
use crate::correlate::Correlator;
use crate::dispatch::{DispatchOutcome, dispatch};
use crate::editor::{EditorInstance, collect_instances_or_empty};
use crate::menu::{Menu, MenuBuilder, MenuOptions};
use crate::picker::Picker;
use crate::process::{Pid, descendants};
use crate::switch::{errors::SwitchError, types::Backends};
use crate::window::{WindowHandle, WindowInventory};

fn menu_options(config: &NnsConfig) -> MenuOptions {
    MenuOptions {
        icons: config.icons.rules(),
        exclude_marker: config.editor.exclude_marker().to_string(),
        window_icon: config.icons.window_icon().to_string(),
    }
}

/// Assemble the menu from already-collected inventories.
///
/// Buffers come first (servers and buffers in inventory order), followed by
/// plain windows when `include_windows` is set.
pub fn build_menu(
    config: &NnsConfig,
    windows: &WindowInventory<'_>,
    instances: &[EditorInstance],
    correlator: &Correlator<'_>,
) -> Menu {
    let mut builder = MenuBuilder::new(menu_options(config));

    for instance in instances {
        if instance.buffers.is_empty() {
            continue;
        }
        let host = correlator.host_window(instance.pid);
        builder.add_buffers(instance, host.as_ref());
    }

    if config.menu.include_windows() {
        for handle in windows.windows() {
            builder.add_window(handle, &windows.properties(handle));
        }
    }

    let menu = builder.build();
    info!(event = "core.menu.build_completed", entries = menu.len());
    menu
}

/// Take the inventories and build the menu without presenting it.
pub fn collect_menu(config: &NnsConfig, backends: Backends<'_>) -> Result<Menu, SwitchError> {
    backends.windows.ensure_available()?;

    let windows = WindowInventory::snapshot(backends.windows)?;
    let instances = collect_instances_or_empty(backends.editor, config.editor.exclude_marker());
    let correlator = Correlator::new(
        &windows,
        backends.processes,
        config.window_manager.terminal_class(),
    );

    Ok(build_menu(config, &windows, &instances, &correlator))
}

/// Full flow: build the menu, let the user pick, focus the choice.
///
/// A dismissed picker yields a no-op outcome.
pub fn switch(
    config: &NnsConfig,
    backends: Backends<'_>,
    picker: &dyn Picker,
) -> Result<DispatchOutcome, SwitchError> {
    info!(event = "core.switch.started");

    let menu = collect_menu(config, backends)?;
    if menu.is_empty() {
        warn!(event = "core.switch.menu_empty");
    }

    let Some(selection) = picker.choose(menu.entries())? else {
        info!(event = "core.switch.cancelled");
        return Ok(DispatchOutcome::default());
    };

    let outcome = dispatch(&selection, &menu, backends.windows, backends.editor)?;
    info!(event = "core.switch.completed", noop = outcome.is_noop());
    Ok(outcome)
}

/// Rebuild the menu and dispatch a selection obtained elsewhere.
pub fn focus_selection(
    config: &NnsConfig,
    backends: Backends<'_>,
    selection: &str,
) -> Result<DispatchOutcome, SwitchError> {
    let menu = collect_menu(config, backends)?;
    Ok(dispatch(selection, &menu, backends.windows, backends.editor)?)
}

/// Terminal window hosting `pid`, if any.
pub fn find_host_window(
    config: &NnsConfig,
    backends: Backends<'_>,
    pid: Pid,
) -> Result<Option<WindowHandle>, SwitchError> {
    backends.windows.ensure_available()?;

    let windows = WindowInventory::snapshot(backends.windows)?;
    let correlator = Correlator::new(
        &windows,
        backends.processes,
        config.window_manager.terminal_class(),
    );
    Ok(correlator.host_window(pid))
}

/// Sorted descendants of `pid`.
pub fn list_descendants(backends: Backends<'_>, pid: Pid) -> Vec<Pid> {
    descendants(backends.processes, pid).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::editor::inventory::mock::MockEditor;
    use crate::menu::MenuEntry;
    use crate::picker::PickerError;
    use crate::picker::render_line;
    use crate::process::ProcessTable;
    use crate::window::inventory::mock::MockWindows;

    /// Returns a fixed display text (as a rendered line) and records what it was shown.
    struct ScriptedPicker {
        choice: Option<String>,
        shown: RefCell<Vec<String>>,
    }

    impl ScriptedPicker {
        fn choosing(choice: Option<&str>) -> Self {
            Self {
                choice: choice.map(str::to_string),
                shown: RefCell::new(Vec::new()),
            }
        }
    }

    impl Picker for ScriptedPicker {
        fn choose(&self, entries: &[MenuEntry]) -> Result<Option<String>, PickerError> {
            *self.shown.borrow_mut() = entries.iter().map(render_line).collect();
            Ok(self.choice.as_ref().and_then(|choice| {
                entries
                    .iter()
                    .find(|e| &e.display == choice)
                    .map(|e| format!("{}\n", render_line(e)))
                    .or_else(|| Some(format!("{choice}\n")))
            }))
        }
    }

    fn pid(n: u32) -> Pid {
        Pid::from_raw(n)
    }

    /// One kitty window W (pid 100, tree 100 -> 200 -> 300) and one server S at pid 300.
    fn fixture() -> (MockWindows, MockEditor, ProcessTable) {
        let windows = MockWindows::default().with_window("0xW", "kitty", Some(100), "zsh");
        let editor = MockEditor::default().with_server("S", 300, &["a.py", "term://1"]);
        let processes =
            ProcessTable::from_parent_pairs([(pid(100), pid(200)), (pid(200), pid(300))]);
        (windows, editor, processes)
    }

    fn buffers_only() -> NnsConfig {
        let mut config = NnsConfig::default();
        config.menu.include_windows = Some(false);
        config
    }

    #[test]
    fn test_end_to_end_menu() {
        let (windows, editor, processes) = fixture();
        let backends = Backends {
            windows: &windows,
            editor: &editor,
            processes: &processes,
        };

        let menu = collect_menu(&buffers_only(), backends).unwrap();

        assert_eq!(menu.len(), 1);
        let entry = &menu.entries()[0];
        assert_eq!(entry.display, "a.py");
        assert_eq!(entry.icon.as_str(), "python");
        let meta = menu.metadata(&entry.key).unwrap();
        assert_eq!(meta.editor_server.as_deref(), Some("S"));
        assert_eq!(meta.window, Some(WindowHandle::new("0xW")));
    }

    #[test]
    fn test_end_to_end_switch() {
        let (windows, editor, processes) = fixture();
        let backends = Backends {
            windows: &windows,
            editor: &editor,
            processes: &processes,
        };
        let picker = ScriptedPicker::choosing(Some("a.py"));

        let outcome = switch(&buffers_only(), backends, &picker).unwrap();

        assert_eq!(*picker.shown.borrow(), vec!["a.py\0icon\x1fpython"]);
        assert_eq!(outcome.window_focused, Some(WindowHandle::new("0xW")));
        assert_eq!(*windows.focused.borrow(), vec![WindowHandle::new("0xW")]);
        assert_eq!(
            *editor.focused.borrow(),
            vec![("S".to_string(), "a.py".to_string())]
        );
    }

    #[test]
    fn test_cancelled_picker_focuses_nothing() {
        let (windows, editor, processes) = fixture();
        let backends = Backends {
            windows: &windows,
            editor: &editor,
            processes: &processes,
        };
        let picker = ScriptedPicker::choosing(None);

        let outcome = switch(&NnsConfig::default(), backends, &picker).unwrap();

        assert!(outcome.is_noop());
        assert!(windows.focused.borrow().is_empty());
        assert!(editor.focused.borrow().is_empty());
    }

    #[test]
    fn test_windows_listed_after_buffers() {
        let (windows, editor, processes) = fixture();
        let backends = Backends {
            windows: &windows,
            editor: &editor,
            processes: &processes,
        };

        let menu = collect_menu(&NnsConfig::default(), backends).unwrap();
        let displays: Vec<&str> = menu.entries().iter().map(|e| e.display.as_str()).collect();
        assert_eq!(displays, vec!["a.py", "zsh"]);

        let window_meta = menu.lookup("zsh").unwrap();
        assert_eq!(window_meta.window, Some(WindowHandle::new("0xW")));
        assert!(window_meta.editor_server.is_none());
    }

    #[test]
    fn test_same_buffer_in_two_servers_listed_once() {
        let windows = MockWindows::default();
        let editor = MockEditor::default()
            .with_server("S1", 10, &["notes.md"])
            .with_server("S2", 20, &["notes.md"]);
        let processes = ProcessTable::default();
        let backends = Backends {
            windows: &windows,
            editor: &editor,
            processes: &processes,
        };

        let menu = collect_menu(&buffers_only(), backends).unwrap();
        assert_eq!(menu.len(), 1);
        assert_eq!(
            menu.lookup("notes.md").unwrap().editor_server.as_deref(),
            Some("S1")
        );
    }

    #[test]
    fn test_focus_selection_with_unknown_text() {
        let (windows, editor, processes) = fixture();
        let backends = Backends {
            windows: &windows,
            editor: &editor,
            processes: &processes,
        };

        let outcome = focus_selection(&NnsConfig::default(), backends, "whatever").unwrap();
        assert!(outcome.is_noop());
    }

    #[test]
    fn test_find_host_window_and_descendants() {
        let (windows, editor, processes) = fixture();
        let backends = Backends {
            windows: &windows,
            editor: &editor,
            processes: &processes,
        };

        let host = find_host_window(&NnsConfig::default(), backends, pid(300)).unwrap();
        assert_eq!(host, Some(WindowHandle::new("0xW")));
        assert_eq!(list_descendants(backends, pid(100)), vec![pid(200), pid(300)]);
    }

    #[test]
    fn test_other_terminal_class_finds_nothing() {
        let (windows, editor, processes) = fixture();
        let backends = Backends {
            windows: &windows,
            editor: &editor,
            processes: &processes,
        };
        let mut config = buffers_only();
        config.window_manager.terminal_class = Some("Alacritty".to_string());

        let menu = collect_menu(&config, backends).unwrap();
        assert!(menu.lookup("a.py").unwrap().window.is_none());
    }
}
