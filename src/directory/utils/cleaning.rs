use std::path::Path;
use log::info;

use crate::config::Config;
use crate::utils::error::{SiteError, SiteResult};
use crate::utils::fs;

/// Remove the output directory before a build when `clean` is enabled.
///
/// Refuses to delete a directory that contains the source tree.
pub fn clean_destination(config: &Config) -> SiteResult<()> {
    let destination = &config.output;

    if !config.clean || !destination.exists() {
        return Ok(());
    }

    if contains_source(destination, &config.input) {
        return Err(SiteError::Config(format!(
            "Refusing to clean {}: it contains the source directory",
            destination.display()
        )));
    }

    info!("Cleaning destination directory: {}", destination.display());
    fs::remove_directory(destination)
}

fn contains_source(destination: &Path, source: &Path) -> bool {
    match (destination.canonicalize(), source.canonicalize()) {
        (Ok(dest), Ok(src)) => src.starts_with(dest),
        // Unresolvable source: fall back to a lexical check
        _ => source.starts_with(destination),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_for(input: &Path, output: &Path) -> Config {
        Config {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            clean: true,
            ..Config::default()
        }
    }

    #[test]
    fn test_clean_removes_output() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        fs::write_file(out.join("stale.html"), "old").unwrap();

        clean_destination(&config_for(&dir.path().join("src"), &out)).unwrap();
        assert!(!out.exists());
    }

    #[test]
    fn test_clean_refuses_parent_of_source() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("site");
        fs::create_directory(&src).unwrap();

        let err = clean_destination(&config_for(&src, dir.path())).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
        assert!(src.exists());
    }

    #[test]
    fn test_clean_disabled_is_noop() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        fs::write_file(out.join("keep.html"), "x").unwrap();

        let mut config = config_for(&dir.path().join("src"), &out);
        config.clean = false;
        clean_destination(&config).unwrap();
        assert!(out.join("keep.html").exists());
    }
}
