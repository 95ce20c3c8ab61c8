//! Configuration type definitions for nns.
//!
//! Every file-level field is optional so that one file can override only
//! what it mentions; accessors supply the defaults.
//!
//! # Example Configuration
//!
//! ```toml
//! [window_manager]
//! terminal_class = "kitty"
//!
//! [editor]
//! buffers_expr = "join(GetActiveBuffers())"
//! exclude_marker = "term"
//!
//! [process]
//! source = "sysinfo"
//!
//! [menu]
//! include_windows = true
//!
//! [picker]
//! prompt = "Fly to window"
//! icon_theme = "Papirus"
//!
//! [icons]
//! python = "python"
//! rust = "text-rust"
//! default = "nvim"
//! ```

use serde::{Deserialize, Serialize};

use crate::process::ProcessSource;

/// Main configuration loaded from TOML config files.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NnsConfig {
    #[serde(default)]
    pub window_manager: WindowManagerConfig,

    #[serde(default)]
    pub editor: EditorConfig,

    #[serde(default)]
    pub process: ProcessConfig,

    #[serde(default)]
    pub menu: MenuConfig,

    #[serde(default)]
    pub picker: PickerConfig,

    #[serde(default)]
    pub icons: IconConfig,
}

/// Window manager settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WindowManagerConfig {
    /// Substring of `WM_CLASS` identifying the terminal emulator.
    /// Default: "kitty".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_class: Option<String>,
}

/// Editor remote-control settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EditorConfig {
    /// Remote expression returning the space-joined buffer list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffers_expr: Option<String>,

    /// Buffers containing this substring are hidden. Default: "term".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_marker: Option<String>,
}

/// Process tree settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProcessConfig {
    /// Either "sysinfo" (one snapshot) or "pgrep" (one query per process).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ProcessSource>,
}

/// Menu composition settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MenuConfig {
    /// Also list plain window-manager leaves after the buffers. Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_windows: Option<bool>,
}

/// Picker (rofi) presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PickerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
}

/// Icon names attached to menu entries.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IconConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rust: Option<String>,

    /// Icon for buffers matching no rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Icon for windows whose class is unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nns_config_serialization_roundtrip() {
        let mut config = NnsConfig::default();
        config.window_manager.terminal_class = Some("Alacritty".to_string());
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: NnsConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.window_manager.terminal_class.as_deref(), Some("Alacritty"));
    }

    #[test]
    fn test_partial_file_leaves_other_sections_unset() {
        let toml_str = r#"
[picker]
prompt = "Go"
"#;
        let config: NnsConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.picker.prompt.as_deref(), Some("Go"));
        assert!(config.picker.theme.is_none());
        assert!(config.window_manager.terminal_class.is_none());
        assert!(config.menu.include_windows.is_none());
    }

    #[test]
    fn test_unknown_process_source_is_parse_error() {
        let result: Result<NnsConfig, _> = toml::from_str("[process]\nsource = \"procfs\"\n");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("procfs"), "unexpected message: {}", message);
        assert!(message.contains("pgrep"), "unexpected message: {}", message);
    }
}
