use clap::ArgMatches;
use tracing::error;

use nns_core::events;

pub mod helpers;

mod descendants;
mod focus;
mod host;
mod list;
mod switch;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("switch", sub_matches)) => switch::handle_switch_command(sub_matches),
        Some(("list", sub_matches)) => list::handle_list_command(sub_matches),
        Some(("focus", sub_matches)) => focus::handle_focus_command(sub_matches),
        Some(("descendants", sub_matches)) => {
            descendants::handle_descendants_command(sub_matches)
        }
        Some(("host", sub_matches)) => host::handle_host_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
