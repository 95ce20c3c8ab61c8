use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("nns")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Jump to any terminal window or editor buffer from one fuzzy picker")
        .long_about(
            "nns lists open window-manager windows and open neovim buffers in a single rofi \
             menu. Buffers are linked to the terminal window their editor runs in, so picking \
             one focuses that window and then the buffer.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Read configuration from this file (on top of the user config)")
                .value_parser(clap::value_parser!(std::path::PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("terminal-class")
                .long("terminal-class")
                .short('t')
                .help("WM_CLASS substring identifying the terminal emulator (overrides config)")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("switch")
                .about("Show the picker and focus the chosen window or buffer")
                .arg(
                    Arg::new("prompt")
                        .long("prompt")
                        .short('p')
                        .help("Picker prompt (overrides config)"),
                )
                .arg(
                    Arg::new("buffers-only")
                        .long("buffers-only")
                        .help("Only offer editor buffers, not plain windows")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("Print the menu without showing the picker")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("buffers-only")
                        .long("buffers-only")
                        .help("Only list editor buffers, not plain windows")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("focus")
                .about("Focus the entry whose text matches the given selection")
                .arg(
                    Arg::new("selection")
                        .help("Menu text as printed by 'nns list'")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("descendants")
                .about("Print every descendant process id of a process")
                .arg(
                    Arg::new("pid")
                        .help("Process id to start from")
                        .required(true)
                        .value_parser(clap::value_parser!(u32))
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("host")
                .about("Print the terminal window hosting a process")
                .arg(
                    Arg::new("pid")
                        .help("Process id to look up")
                        .required(true)
                        .value_parser(clap::value_parser!(u32))
                        .index(1),
                ),
        )
}
