//! `get`: open a locally cloned GitHub repository in an editor.

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::{error::ErrorKind, Parser, Subcommand};
use get_repo::logging;

use commands::config::ConfigAction;

#[derive(Parser)]
#[command(name = "get", version, about = "Quickly open GitHub repositories")]
struct Cli {
    /// Ignore saved editor configuration and prompt for editor selection
    #[arg(short, long, global = true)]
    ignore_config: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a specific repository
    Open {
        /// Part of the repository name (case-insensitive)
        #[arg(value_name = "REPO")]
        repo: String,
    },

    /// Inspect or edit the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Upgrade to the latest version of the 'get' CLI
    Upgrade,

    /// Uninstall the 'get' CLI
    Uninstall {
        /// Skip the confirmation question
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> ExitCode {
    logging::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None => commands::open::cmd_interactive(cli.ignore_config),
        Some(Commands::Open { repo }) => commands::open::cmd_open(&repo, cli.ignore_config),
        Some(Commands::Config { action }) => commands::config::cmd_config(action),
        Some(Commands::Upgrade) => commands::upgrade::cmd_upgrade(),
        Some(Commands::Uninstall { yes }) => commands::uninstall::cmd_uninstall(yes),
    }
}
