use std::path::Path;
use log::debug;

use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{SiteError, SiteResult};
use crate::utils::fs;

/// Load the build configuration.
///
/// Starts from defaults and, when `config_file` is given, layers the file on
/// top. Callers apply command-line overrides afterwards and validate.
pub fn load_config<P: AsRef<Path>>(config_file: Option<P>) -> SiteResult<Config> {
    let config = match config_file {
        Some(path) => {
            debug!("Loading configuration from {}", path.as_ref().display());
            parse_config_file(path.as_ref())?
        }
        None => {
            debug!("No configuration file given, using defaults");
            Config::default()
        }
    };

    Ok(config)
}

/// Validate a configuration after all overrides are applied
pub fn finalize(config: Config) -> SiteResult<Config> {
    validation::validate_config(&config)?;
    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Parse a configuration file based on its extension
fn parse_config_file(path: &Path) -> SiteResult<Config> {
    let content = fs::read_file(path)?;

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "toml" => toml::from_str(&content).map_err(|e| {
            SiteError::Config(format!("Failed to parse TOML configuration ({}): {}", path.display(), e))
        }),
        // Assume YAML for .yml, .yaml and anything without an extension
        "yml" | "yaml" | "" => parse_yaml_config(&content, path),
        other => Err(SiteError::Config(format!(
            "Unsupported configuration file format: {}",
            other
        ))),
    }
}

fn parse_yaml_config(content: &str, path: &Path) -> SiteResult<Config> {
    // An empty YAML document deserializes to null, not to an empty map
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(content).map_err(|e| {
        SiteError::Config(format!("Failed to parse YAML configuration ({}): {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_load_without_file_gives_defaults() {
        let config = load_config(None::<&Path>).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output, PathBuf::from("./site"));
    }

    #[test]
    fn test_load_yaml_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("foldsite.yml");
        fs::write_file(&path, "output: public\nskip_static: true\nmarkdown:\n  highlight: false\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.output, PathBuf::from("public"));
        assert!(config.skip_static);
        assert!(!config.markdown.highlight);
        assert!(config.markdown.heading_ids);
    }

    #[test]
    fn test_load_toml_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("foldsite.toml");
        fs::write_file(&path, "input = \"src\"\nclean = true\n\n[markdown]\nsmart_punctuation = true\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.input, PathBuf::from("src"));
        assert!(config.clean);
        assert!(config.markdown.smart_punctuation);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("foldsite.ini");
        fs::write_file(&path, "x=1").unwrap();

        assert!(matches!(load_config(Some(&path)), Err(SiteError::Config(_))));
    }
}
