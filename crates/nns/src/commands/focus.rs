use clap::ArgMatches;
use tracing::{error, info};

use nns_core::events;
use nns_core::switch::SystemBackends;
use nns_core::switch_ops;

use super::helpers::load_config_with_warning;

pub(crate) fn handle_focus_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let selection = matches
        .get_one::<String>("selection")
        .ok_or("Selection argument is required")?;
    let config = load_config_with_warning(matches);

    info!(event = "cli.focus_started", selection = %selection);

    let system = SystemBackends::from_config(&config);
    match switch_ops::focus_selection(&config, system.backends(), selection) {
        Ok(outcome) => {
            if outcome.is_noop() {
                eprintln!("No entry matches '{}'.", selection.trim_end());
            }
            info!(event = "cli.focus_completed", noop = outcome.is_noop());
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Focus failed: {}", e);
            error!(event = "cli.focus_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
