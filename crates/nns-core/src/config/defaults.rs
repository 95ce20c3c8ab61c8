//! Default values for configuration fields.

use crate::config::types::{
    EditorConfig, IconConfig, MenuConfig, PickerConfig, ProcessConfig, WindowManagerConfig,
};
use crate::menu::{IconRule, IconRules};
use crate::picker::RofiSettings;
use crate::process::ProcessSource;

pub const DEFAULT_TERMINAL_CLASS: &str = "kitty";
pub const DEFAULT_BUFFERS_EXPR: &str = "join(GetActiveBuffers())";
pub const DEFAULT_EXCLUDE_MARKER: &str = "term";
pub const DEFAULT_PROMPT: &str = "Fly to window 🐦";
pub const DEFAULT_ICON_THEME: &str = "Papirus";
pub const DEFAULT_THEME: &str = "gruvbox-dark";
pub const DEFAULT_FONT: &str = "JetBrainsMono Nerd Font 15";
pub const DEFAULT_PYTHON_ICON: &str = "python";
pub const DEFAULT_RUST_ICON: &str = "text-rust";
pub const DEFAULT_EDITOR_ICON: &str = "nvim";
pub const DEFAULT_WINDOW_ICON: &str = "window";

impl WindowManagerConfig {
    pub fn terminal_class(&self) -> &str {
        self.terminal_class.as_deref().unwrap_or(DEFAULT_TERMINAL_CLASS)
    }
}

impl EditorConfig {
    pub fn buffers_expr(&self) -> &str {
        self.buffers_expr.as_deref().unwrap_or(DEFAULT_BUFFERS_EXPR)
    }

    pub fn exclude_marker(&self) -> &str {
        self.exclude_marker.as_deref().unwrap_or(DEFAULT_EXCLUDE_MARKER)
    }
}

impl ProcessConfig {
    pub fn source(&self) -> ProcessSource {
        self.source.unwrap_or_default()
    }
}

impl MenuConfig {
    pub fn include_windows(&self) -> bool {
        self.include_windows.unwrap_or(true)
    }
}

impl PickerConfig {
    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    /// Settings for rofi; the terminal defaults to the configured terminal class.
    pub fn rofi_settings(&self, terminal_class: &str) -> RofiSettings {
        RofiSettings {
            prompt: self.prompt().to_string(),
            icon_theme: Some(
                self.icon_theme
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ICON_THEME.to_string()),
            ),
            theme: Some(self.theme.clone().unwrap_or_else(|| DEFAULT_THEME.to_string())),
            font: Some(self.font.clone().unwrap_or_else(|| DEFAULT_FONT.to_string())),
            terminal: Some(
                self.terminal
                    .clone()
                    .unwrap_or_else(|| terminal_class.to_string()),
            ),
        }
    }
}

impl IconConfig {
    pub fn window_icon(&self) -> &str {
        self.window.as_deref().unwrap_or(DEFAULT_WINDOW_ICON)
    }

    /// Suffix rules: `.py`, then `.rs`, falling back to the editor icon.
    pub fn rules(&self) -> IconRules {
        IconRules::new(
            vec![
                IconRule::new(".py", self.python.as_deref().unwrap_or(DEFAULT_PYTHON_ICON)),
                IconRule::new(".rs", self.rust.as_deref().unwrap_or(DEFAULT_RUST_ICON)),
            ],
            self.default.as_deref().unwrap_or(DEFAULT_EDITOR_ICON),
        )
    }
}
