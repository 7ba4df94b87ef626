use std::path::Path;
use log::{debug, warn};

use crate::front_matter::parser::parse_yaml;
use crate::front_matter::types::Metadata;
use crate::utils::fs;

/// Load the site-wide metadata defaults.
///
/// A missing, unreadable or malformed file falls back to empty defaults.
pub fn load_defaults(path: Option<&Path>) -> Metadata {
    let Some(path) = path else {
        debug!("No defaults file, using empty defaults");
        return Metadata::new();
    };

    match fs::read_file(path) {
        Ok(content) => {
            let defaults = parse_yaml(&content);
            if defaults.is_empty() && !content.trim().is_empty() {
                warn!("{} has no usable metadata, using empty defaults", path.display());
            }
            debug!("Loaded {} default metadata keys from {}", defaults.len(), path.display());
            defaults
        }
        Err(e) => {
            warn!("Could not read defaults, using empty defaults: {}", e);
            Metadata::new()
        }
    }
}
