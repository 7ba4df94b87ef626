pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use log::error;
use std::process::ExitCode;

use types::{Cli, Commands};

/// Run the command-line interface
pub async fn run() -> ExitCode {
    let cli = Cli::parse();

    logging::init_logging(cli.debug, cli.quiet);

    let result = match &cli.command {
        Commands::Build { input, output } => {
            commands::handle_build_command(&cli, input.as_ref(), output.as_ref())
        }
        Commands::Watch { input, output, serve } => {
            commands::handle_watch_command(&cli, input.as_ref(), output.as_ref(), *serve).await
        }
        Commands::Init { destination } => commands::handle_init_command(destination),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
