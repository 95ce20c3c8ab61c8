//! rofi in dmenu mode.

use tracing::{debug, info, warn};

use crate::command::run_with_input;
use crate::menu::MenuEntry;
use crate::picker::{errors::PickerError, traits::Picker};

const ROFI: &str = "rofi";

/// Marks the start of the out-of-band icon directive on a dmenu line.
const ICON_DIRECTIVE: &str = "\0icon\x1f";

/// Presentation settings passed straight to rofi.
#[derive(Debug, Clone)]
pub struct RofiSettings {
    pub prompt: String,
    pub icon_theme: Option<String>,
    pub theme: Option<String>,
    pub font: Option<String>,
    pub terminal: Option<String>,
}

/// One dmenu line: the display text followed by its icon directive.
pub fn render_line(entry: &MenuEntry) -> String {
    format!("{}{}{}", entry.display, ICON_DIRECTIVE, entry.icon)
}

pub struct RofiPicker {
    settings: RofiSettings,
}

impl RofiPicker {
    pub fn new(settings: RofiSettings) -> Self {
        Self { settings }
    }

    fn args(&self) -> Vec<&str> {
        let mut args = vec!["-dmenu", "-show-icons", "-p", self.settings.prompt.as_str()];

        let optional = [
            ("-icon-theme", &self.settings.icon_theme),
            ("-theme", &self.settings.theme),
            ("-font", &self.settings.font),
            ("-terminal", &self.settings.terminal),
        ];
        for (flag, value) in optional {
            if let Some(value) = value {
                args.push(flag);
                args.push(value.as_str());
            }
        }

        args
    }
}

/// Build the newline-separated menu, skipping texts that would break framing.
fn render_input(entries: &[MenuEntry]) -> String {
    entries
        .iter()
        .filter(|entry| {
            let ok = !entry.display.contains(['\n', '\0']);
            if !ok {
                debug!(event = "core.picker.entry_skipped", display = ?entry.display);
            }
            ok
        })
        .map(render_line)
        .collect::<Vec<_>>()
        .join("\n")
}

impl Picker for RofiPicker {
    fn choose(&self, entries: &[MenuEntry]) -> Result<Option<String>, PickerError> {
        if which::which(ROFI).is_err() {
            return Err(PickerError::NotInstalled { binary: ROFI });
        }

        let input = render_input(entries);
        info!(event = "core.picker.started", entries = entries.len());

        let output = run_with_input(ROFI, &self.args(), input.as_bytes())?;

        if output.stdout.trim().is_empty() {
            if !output.success && !output.stderr.trim().is_empty() {
                warn!(
                    event = "core.picker.exited_with_error",
                    stderr = %output.stderr.trim()
                );
            }
            info!(event = "core.picker.cancelled");
            return Ok(None);
        }

        info!(event = "core.picker.completed");
        Ok(Some(output.stdout))
    }
}
