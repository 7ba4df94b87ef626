use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};
use log::{debug, error, info};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Result as NotifyResult, Watcher};

use crate::builder::site::build_site;
use crate::config::Config;
use crate::utils::error::BoxResult;

/// Quiet period after a change before rebuilding
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Build once, then rebuild on every change under the input directory.
/// Blocks until the watcher goes away.
pub fn watch_site(config: &Config) -> BoxResult<()> {
    rebuild(config);

    let (tx, rx) = channel();
    let _watcher = start_watcher(config, tx)?;

    info!("Watching for changes. Press Ctrl+C to stop.");
    rebuild_on_changes(rx, config, DEBOUNCE);
    Ok(())
}

/// Watch the input directory, forwarding events that do not touch the output
pub fn start_watcher(config: &Config, tx: Sender<Event>) -> BoxResult<RecommendedWatcher> {
    let ignored = ignored_roots(config);
    debug!("Ignoring changes under {:?}", ignored);

    let mut watcher = notify::recommended_watcher(move |res: NotifyResult<Event>| match res {
        Ok(event) => {
            let relevant = matches!(
                event.kind,
                EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
            ) && event.paths.iter().any(|p| !is_ignored(p, &ignored));

            if relevant {
                tx.send(event).unwrap_or_else(|e| {
                    error!("Error sending file event: {}", e);
                });
            }
        }
        Err(e) => error!("Watch error: {}", e),
    })?;

    watcher.watch(&config.input, RecursiveMode::Recursive)?;
    info!("Watching source directory: {}", config.input.display());
    Ok(watcher)
}

/// Rebuild after each burst of events until the sender is dropped
pub fn rebuild_on_changes(rx: Receiver<Event>, config: &Config, debounce: Duration) {
    loop {
        match rx.recv_timeout(Duration::from_secs(1)) {
            Ok(event) => {
                debug!("File event: {:?}", event);

                // Wait for the burst to settle
                let mut deadline = Instant::now() + debounce;
                while let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
                    match rx.recv_timeout(remaining) {
                        Ok(_) => deadline = Instant::now() + debounce,
                        Err(RecvTimeoutError::Timeout) => break,
                        Err(RecvTimeoutError::Disconnected) => return,
                    }
                }

                info!("File change detected, rebuilding site...");
                rebuild(config);
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                debug!("Watcher closed");
                break;
            }
        }
    }
}

fn rebuild(config: &Config) {
    if let Err(e) = build_site(config) {
        error!("Error rebuilding site: {}", e);
    }
}

/// Directories whose changes never trigger a rebuild
fn ignored_roots(config: &Config) -> Vec<PathBuf> {
    let mut roots = vec![absolute(&config.output)];
    if let Some(scratch) = &config.scratch_root {
        roots.push(absolute(scratch));
    }
    roots
}

fn absolute(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    })
}

fn is_ignored(path: &Path, ignored: &[PathBuf]) -> bool {
    ignored.iter().any(|root| path.starts_with(root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_changes_are_ignored() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("site");
        std::fs::create_dir_all(&output).unwrap();

        let config = Config {
            input: dir.path().to_path_buf(),
            output: output.clone(),
            ..Config::default()
        };
        let ignored = ignored_roots(&config);

        let output = output.canonicalize().unwrap();
        assert!(is_ignored(&output.join("index.html"), &ignored));
        assert!(!is_ignored(&dir.path().canonicalize().unwrap().join("content/index.md"), &ignored));
    }

    #[test]
    fn test_rebuild_loop_ends_when_sender_dropped() {
        let (tx, rx) = channel::<Event>();
        drop(tx);
        rebuild_on_changes(rx, &Config::default(), Duration::from_millis(10));
    }
}
