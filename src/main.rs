//! newyear - terminal fireworks show and prompt-echo greeter

mod commands;

use std::process;

use clap::Parser;
use newyear::cli::{Cli, Commands, ConfigCommands};
use newyear::fireworks::{ShowError, INTERRUPTED_EXIT_CODE};
use newyear::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Ask => commands::ask::handle(),
        Commands::Fireworks(args) => commands::fireworks::handle(&args),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    };

    if let Err(e) = result {
        if matches!(e.downcast_ref::<ShowError>(), Some(ShowError::Interrupted)) {
            tracing::info!("interrupted by user");
            process::exit(INTERRUPTED_EXIT_CODE);
        }
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
