//! Configuration loading and merging logic.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::types::{
    EditorConfig, IconConfig, MenuConfig, NnsConfig, PickerConfig, ProcessConfig,
    WindowManagerConfig,
};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Path of the per-user config file, if a config directory exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("nns").join("config.toml"))
}

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`$XDG_CONFIG_HOME/nns/config.toml`), skipped when absent
/// 3. `explicit`, which must exist when given
///
/// # Errors
///
/// Returns an error if a present file cannot be parsed, the explicit file is
/// missing, or validation fails.
pub fn load_hierarchy(explicit: Option<&Path>) -> Result<NnsConfig, ConfigError> {
    let mut config = NnsConfig::default();

    if let Some(path) = user_config_path() {
        match load_config_file(&path) {
            Ok(user_config) => config = merge_configs(config, user_config),
            Err(ConfigError::ConfigNotFound { .. }) => {
                debug!(event = "core.config.user_config_absent", path = %path.display());
            }
            Err(e) => return Err(e),
        }
    }

    if let Some(path) = explicit {
        let explicit_config = load_config_file(path)?;
        config = merge_configs(config, explicit_config);
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<NnsConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Every field is optional, so an override only replaces what it sets.
pub fn merge_configs(base: NnsConfig, override_config: NnsConfig) -> NnsConfig {
    NnsConfig {
        window_manager: WindowManagerConfig {
            terminal_class: override_config
                .window_manager
                .terminal_class
                .or(base.window_manager.terminal_class),
        },
        editor: EditorConfig {
            buffers_expr: override_config.editor.buffers_expr.or(base.editor.buffers_expr),
            exclude_marker: override_config
                .editor
                .exclude_marker
                .or(base.editor.exclude_marker),
        },
        process: ProcessConfig {
            source: override_config.process.source.or(base.process.source),
        },
        menu: MenuConfig {
            include_windows: override_config
                .menu
                .include_windows
                .or(base.menu.include_windows),
        },
        picker: PickerConfig {
            prompt: override_config.picker.prompt.or(base.picker.prompt),
            icon_theme: override_config.picker.icon_theme.or(base.picker.icon_theme),
            theme: override_config.picker.theme.or(base.picker.theme),
            font: override_config.picker.font.or(base.picker.font),
            terminal: override_config.picker.terminal.or(base.picker.terminal),
        },
        icons: IconConfig {
            python: override_config.icons.python.or(base.icons.python),
            rust: override_config.icons.rust.or(base.icons.rust),
            default: override_config.icons.default.or(base.icons.default),
            window: override_config.icons.window.or(base.icons.window),
        },
    }
}
