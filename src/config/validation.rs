use std::path::Path;

use crate::config::Config;
use crate::utils::error::{SiteError, SiteResult};

/// Validate the configuration
pub fn validate_config(config: &Config) -> SiteResult<()> {
    if config.output.as_os_str().is_empty() {
        return Err(SiteError::Config("Output directory must not be empty".to_string()));
    }

    let same = match (config.input.canonicalize(), config.output.canonicalize()) {
        (Ok(input), Ok(output)) => input == output,
        _ => config.input == config.output,
    };
    if same {
        return Err(SiteError::Config(format!(
            "Output directory {} is the same as the input directory",
            config.output.display()
        )));
    }

    if config.clean && contains(&config.output, &config.input) {
        return Err(SiteError::Config(format!(
            "Refusing to clean {}: it contains the input directory",
            config.output.display()
        )));
    }

    Ok(())
}

fn contains(outer: &Path, inner: &Path) -> bool {
    match (outer.canonicalize(), inner.canonicalize()) {
        (Ok(outer), Ok(inner)) => inner.starts_with(outer),
        _ => inner.starts_with(outer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_output_equal_to_input_rejected() {
        let config = Config {
            input: PathBuf::from("/srv/site"),
            output: PathBuf::from("/srv/site"),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_clean_output_containing_input_rejected() {
        let config = Config {
            input: PathBuf::from("/srv/site/src"),
            output: PathBuf::from("/srv/site"),
            clean: true,
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
        assert!(validate_config(&Config { clean: false, ..config }).is_ok());
    }
}
