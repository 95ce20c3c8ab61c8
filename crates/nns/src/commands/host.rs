use clap::ArgMatches;
use tracing::{error, info};

use nns_core::Pid;
use nns_core::events;
use nns_core::switch::SystemBackends;
use nns_core::switch_ops;

use super::helpers::load_config_with_warning;

pub(crate) fn handle_host_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let raw = *matches
        .get_one::<u32>("pid")
        .ok_or("PID argument is required")?;
    let pid = Pid::new(raw)?;
    let config = load_config_with_warning(matches);

    let system = SystemBackends::from_config(&config);
    match switch_ops::find_host_window(&config, system.backends(), pid) {
        Ok(Some(window)) => {
            println!("{}", window);
            info!(event = "cli.host_completed", pid = raw, window = %window);
            Ok(())
        }
        Ok(None) => {
            eprintln!(
                "No '{}' window hosts process {}.",
                config.window_manager.terminal_class(),
                raw
            );
            info!(event = "cli.host_not_found", pid = raw);
            Err(format!("no host window for pid {}", raw).into())
        }
        Err(e) => {
            eprintln!("❌ Host lookup failed: {}", e);
            error!(event = "cli.host_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
