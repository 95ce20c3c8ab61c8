use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use nns_core::events;
use nns_core::switch::SystemBackends;
use nns_core::switch_ops;
use nns_core::{EntryMetadata, IconTag, Menu};

use super::helpers::{apply_buffers_only, load_config_with_warning};

#[derive(Serialize)]
struct ListedEntry<'a> {
    display: &'a str,
    icon: &'a IconTag,
    #[serde(flatten)]
    metadata: Option<&'a EntryMetadata>,
}

fn listed_entries(menu: &Menu) -> Vec<ListedEntry<'_>> {
    menu.entries()
        .iter()
        .map(|entry| ListedEntry {
            display: &entry.display,
            icon: &entry.icon,
            metadata: menu.metadata(&entry.key),
        })
        .collect()
}

pub(crate) fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let mut config = load_config_with_warning(matches);
    apply_buffers_only(&mut config, matches);

    info!(event = "cli.list_started", json_output = json_output);

    let system = SystemBackends::from_config(&config);
    match switch_ops::collect_menu(&config, system.backends()) {
        Ok(menu) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&listed_entries(&menu))?);
            } else {
                for entry in menu.entries() {
                    println!("{}", entry.display);
                }
            }

            info!(event = "cli.list_completed", count = menu.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to build menu: {}", e);
            error!(event = "cli.list_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
