use log::info;
use std::path::PathBuf;

use crate::builder;
use crate::cli::types::Cli;
use crate::utils::error::BoxResult;

/// Handle the build command
pub fn handle_build_command(cli: &Cli, input: Option<&PathBuf>, output: Option<&PathBuf>) -> BoxResult<()> {
    let config = cli.build_config(input, output)?;

    builder::build_site(&config)?;
    info!("Site built successfully at {}", config.output.display());
    Ok(())
}
