use log::{error, info};
use std::path::PathBuf;
use std::sync::mpsc::channel;

use crate::builder::{self, watcher};
use crate::cli::types::Cli;
use crate::server::{self, ServerConfig};
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Handle the watch command, optionally serving the output
pub async fn handle_watch_command(
    cli: &Cli,
    input: Option<&PathBuf>,
    output: Option<&PathBuf>,
    serve: Option<u16>,
) -> BoxResult<()> {
    let config = cli.build_config(input, output)?;

    let Some(port) = serve else {
        return builder::watch_site(&config);
    };

    info!("Building site before serving...");
    if let Err(e) = builder::build_site(&config) {
        // Keep serving so the next save can fix the build
        error!("Failed to build site: {}", e);
    }
    fs::create_directory(&config.output)?;

    let (tx, rx) = channel();
    let fs_watcher = watcher::start_watcher(&config, tx)?;
    let rebuild_config = config.clone();
    std::thread::spawn(move || {
        let _fs_watcher = fs_watcher;
        watcher::rebuild_on_changes(rx, &rebuild_config, watcher::DEBOUNCE);
    });

    server::serve(&ServerConfig::new(config.output.clone(), port)).await
}
