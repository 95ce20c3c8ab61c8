use std::path::PathBuf;

use clap::ArgMatches;
use tracing::warn;

use nns_core::NnsConfig;
use nns_core::config::loading::user_config_path;

/// Load the config hierarchy, falling back to defaults with a visible warning.
///
/// Command-line overrides shared by every subcommand are applied on top.
pub fn load_config_with_warning(matches: &ArgMatches) -> NnsConfig {
    let explicit = matches.get_one::<PathBuf>("config");

    let mut config = match NnsConfig::load_hierarchy(explicit.map(PathBuf::as_path)) {
        Ok(config) => config,
        Err(e) => {
            warn!(event = "cli.config_load_failed", error = %e);
            eprintln!("Warning: Could not load config: {}. Using defaults.", e);
            let user_path = user_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "~/.config/nns/config.toml".to_string());
            eprintln!("Tip: Check {} and any file passed with --config.", user_path);
            NnsConfig::default()
        }
    };

    if let Some(class) = matches.get_one::<String>("terminal-class") {
        let previous = config.window_manager.terminal_class.replace(class.clone());
        if let Err(e) = config.validate() {
            warn!(event = "cli.override_rejected", flag = "terminal-class", error = %e);
            eprintln!("Warning: Ignoring --terminal-class: {}", e);
            config.window_manager.terminal_class = previous;
        }
    }

    config
}

/// Apply the `--buffers-only` flag when the subcommand defines it.
pub fn apply_buffers_only(config: &mut NnsConfig, matches: &ArgMatches) {
    if matches.get_flag("buffers-only") {
        config.menu.include_windows = Some(false);
    }
}
