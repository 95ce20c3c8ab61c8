use crate::config::NnsConfig;
use crate::editor::{EditorBackend, NvrBackend};
use crate::picker::RofiPicker;
use crate::process::{ChildLister, child_lister_for};
use crate::window::{BspwmBackend, WindowBackend};

/// The collaborators one run talks to.
#[derive(Clone, Copy)]
pub struct Backends<'a> {
    pub windows: &'a dyn WindowBackend,
    pub editor: &'a dyn EditorBackend,
    pub processes: &'a dyn ChildLister,
}

/// Concrete bspwm + nvr + rofi bindings built from configuration.
pub struct SystemBackends {
    pub windows: BspwmBackend,
    pub editor: NvrBackend,
    pub processes: Box<dyn ChildLister>,
    pub picker: RofiPicker,
}

impl SystemBackends {
    pub fn from_config(config: &NnsConfig) -> Self {
        let terminal_class = config.window_manager.terminal_class();
        Self {
            windows: BspwmBackend,
            editor: NvrBackend::new(config.editor.buffers_expr()),
            processes: child_lister_for(config.process.source()),
            picker: RofiPicker::new(config.picker.rofi_settings(terminal_class)),
        }
    }

    pub fn backends(&self) -> Backends<'_> {
        Backends {
            windows: &self.windows,
            editor: &self.editor,
            processes: self.processes.as_ref(),
        }
    }
}
