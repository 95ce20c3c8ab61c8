use clap::ArgMatches;
use tracing::info;

use nns_core::Pid;
use nns_core::switch::SystemBackends;
use nns_core::switch_ops;

use super::helpers::load_config_with_warning;

pub(crate) fn handle_descendants_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = *matches
        .get_one::<u32>("pid")
        .ok_or("PID argument is required")?;
    let pid = Pid::new(raw)?;
    let config = load_config_with_warning(matches);

    // Only the process source is consulted; no window manager is required.
    let system = SystemBackends::from_config(&config);
    let found = switch_ops::list_descendants(system.backends(), pid);

    for child in &found {
        println!("{}", child);
    }

    info!(
        event = "cli.descendants_completed",
        pid = raw,
        count = found.len()
    );
    Ok(())
}
