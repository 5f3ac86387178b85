use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, Command};

use taskbar::commands;
use taskbar::core::config::CONFIG_KEYS;

fn build_cli() -> Command {
    Command::new("taskbar")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Status bar for tiling window managers: provider snapshots in, bar out")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("run")
                .about("Read provider updates (one JSON object per line) and print the bar after each")
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .value_name("FILE")
                        .help("Read updates from FILE instead of stdin ('-' for stdin)"),
                )
                .arg(json_flag())
                .arg(plain_flag()),
        )
        .subcommand(
            Command::new("render")
                .about("Render the bar once from a snapshot file")
                .arg(
                    Arg::new("file")
                        .help("JSON file keyed by subsystem name")
                        .required(true)
                        .index(1),
                )
                .arg(json_flag())
                .arg(plain_flag()),
        )
        .subcommand(
            Command::new("exec")
                .about("Send a window-manager command or tray action")
                .long_about("Send a window-manager command or tray action\n\nACTIONS:\n    toggle-tiling               toggle-tiling-direction\n    focus <workspace>           focus --workspace <workspace>\n    toggle-pause                wm-toggle-pause\n    exit-binding-mode <name>    wm-disable-binding-mode --name <name>\n    tray-left <id>              left-click a tray icon\n    tray-right <id>             right-click a tray icon")
                .arg(
                    Arg::new("action")
                        .help("Action to send")
                        .required(true)
                        .index(1)
                        .value_parser(PossibleValuesParser::new(commands::exec::ACTIONS)),
                )
                .arg(
                    Arg::new("target")
                        .help("Workspace name, binding mode name or tray icon id")
                        .index(2),
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .help("Print the command without sending it")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("emit-json")
                        .long("emit-json")
                        .help("Write the action as a JSON line for the provider runtime")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Manage configuration (use 'taskbar config --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(Command::new("show").about("Show the current configuration"))
                .subcommand(Command::new("path").about("Show the configuration file path"))
                .subcommand(Command::new("reset").about("Reset configuration to defaults"))
                .subcommand(
                    Command::new("set")
                        .about("Set a configuration value")
                        .arg(
                            Arg::new("key")
                                .help("Configuration key")
                                .required(true)
                                .index(1)
                                .value_parser(PossibleValuesParser::new(CONFIG_KEYS)),
                        )
                        .arg(
                            Arg::new("value")
                                .help("New value (comma-separated for tray_allow_list)")
                                .required(true)
                                .index(2),
                        ),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Target shell")
                        .required(true)
                        .index(1)
                        .value_parser(PossibleValuesParser::new(commands::completions::SHELLS)),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Print the bar model as JSON")
        .action(ArgAction::SetTrue)
}

fn plain_flag() -> Arg {
    Arg::new("plain")
        .long("plain")
        .help("Disable colors")
        .action(ArgAction::SetTrue)
}

fn main() -> Result<()> {
    taskbar::init_logging();

    let mut cli = build_cli();
    let matches = cli.clone().get_matches();

    if matches.get_flag("version") {
        return commands::version();
    }

    match matches.subcommand() {
        Some(("run", sub_matches)) => commands::run(sub_matches),
        Some(("render", sub_matches)) => commands::render(sub_matches),
        Some(("exec", sub_matches)) => commands::exec::execute(sub_matches),
        Some(("config", sub_matches)) => commands::config::execute(sub_matches),
        Some(("completions", sub_matches)) => {
            commands::completions::execute(sub_matches, &mut cli)
        }
        Some(("version", _)) => commands::version(),
        _ => {
            println!("Welcome to taskbar!");
            println!("Use 'taskbar --help' for more information.");
            Ok(())
        }
    }
}
