//! # Configuration System
//!
//! Hierarchical TOML configuration for nns.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `$XDG_CONFIG_HOME/nns/config.toml`
//! 3. **Explicit config** - the file given with `--config`
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.config/nns/config.toml
//! [window_manager]
//! terminal_class = "Alacritty"
//!
//! [process]
//! source = "pgrep"
//!
//! [picker]
//! prompt = "Go to"
//! theme = "gruvbox-dark"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use nns_core::config::NnsConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = NnsConfig::load_hierarchy(None)?;
//!     println!("{}", config.window_manager.terminal_class());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

use std::path::Path;

use crate::errors::ConfigError;

// Public API exports
pub use types::{
    EditorConfig, IconConfig, MenuConfig, NnsConfig, PickerConfig, ProcessConfig,
    WindowManagerConfig,
};
pub use validation::validate_config;

impl NnsConfig {
    /// Load configuration from defaults, the user file and an optional explicit file.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        loading::load_hierarchy(explicit)
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
