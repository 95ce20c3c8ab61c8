use clap::ArgMatches;
use tracing::{error, info};

use nns_core::events;
use nns_core::switch::SystemBackends;
use nns_core::switch_ops;

use super::helpers::{apply_buffers_only, load_config_with_warning};

pub(crate) fn handle_switch_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config_with_warning(matches);
    apply_buffers_only(&mut config, matches);
    if let Some(prompt) = matches.get_one::<String>("prompt") {
        config.picker.prompt = Some(prompt.clone());
    }

    info!(event = "cli.switch_started");

    let system = SystemBackends::from_config(&config);
    match switch_ops::switch(&config, system.backends(), &system.picker) {
        Ok(outcome) => {
            info!(event = "cli.switch_completed", noop = outcome.is_noop());
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Switch failed: {}", e);
            error!(event = "cli.switch_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
