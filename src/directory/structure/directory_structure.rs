use std::path::{Path, PathBuf};
use log::{debug, warn};

use crate::directory::types::DirectoryType;
use crate::directory::walker::{walk, FsEntry};
use crate::utils::error::{SiteError, SiteResult};

/// The reserved entries found at the root of a site source directory
#[derive(Debug, Clone)]
pub struct DirectoryStructure {
    pub source: PathBuf,
    pub layouts: Option<FsEntry>,
    pub partials: Option<FsEntry>,
    pub helpers: Option<FsEntry>,
    pub content: FsEntry,
    pub static_dir: Option<FsEntry>,
    pub favicon: Option<FsEntry>,
    pub defaults: Option<FsEntry>,
}

impl DirectoryStructure {
    /// Walk `source` and classify its immediate children by reserved name.
    ///
    /// Unrecognized entries are ignored. A missing `content` directory is an error.
    pub fn discover<P: AsRef<Path>>(source: P) -> SiteResult<Self> {
        let source = source.as_ref().to_path_buf();
        let entries = walk(&source)?;

        let mut layouts = None;
        let mut partials = None;
        let mut helpers = None;
        let mut content = None;
        let mut static_dir = None;
        let mut favicon = None;
        let mut defaults = None;

        for entry in entries {
            let slot = match DirectoryType::classify(&entry) {
                Some(DirectoryType::Layouts) => &mut layouts,
                Some(DirectoryType::Partials) => &mut partials,
                Some(DirectoryType::Helpers) => &mut helpers,
                Some(DirectoryType::Content) => &mut content,
                Some(DirectoryType::Static) => &mut static_dir,
                Some(DirectoryType::Favicon) => &mut favicon,
                Some(DirectoryType::Defaults) => &mut defaults,
                None => {
                    debug!("Ignoring top-level entry {}", entry.filename);
                    continue;
                }
            };

            if let Some(previous) = slot.replace(entry) {
                warn!("Multiple candidates for {}, ignoring {}", previous.name, previous.filename);
            }
        }

        let content = content.ok_or_else(|| SiteError::MissingContent(source.clone()))?;

        Ok(DirectoryStructure {
            source,
            layouts,
            partials,
            helpers,
            content,
            static_dir,
            favicon,
            defaults,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_classifies_reserved_entries() {
        let dir = TempDir::new().unwrap();
        for d in ["content", "layouts", "partials", "helpers", "static", "notes"] {
            fs::create_dir_all(dir.path().join(d)).unwrap();
        }
        fs::write(dir.path().join("favicon.ico"), [0u8, 1, 2]).unwrap();
        fs::write(dir.path().join("defaults.yml"), "layout: base\n").unwrap();
        fs::write(dir.path().join("README.md"), "ignored").unwrap();

        let dirs = DirectoryStructure::discover(dir.path()).unwrap();
        assert_eq!(dirs.content.name, "content");
        assert!(dirs.layouts.is_some());
        assert!(dirs.partials.is_some());
        assert!(dirs.helpers.is_some());
        assert!(dirs.static_dir.is_some());
        assert_eq!(dirs.favicon.unwrap().filename, "favicon.ico");
        assert_eq!(dirs.defaults.unwrap().filename, "defaults.yml");
    }

    #[test]
    fn test_discover_requires_content() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("layouts")).unwrap();

        let err = DirectoryStructure::discover(dir.path()).unwrap_err();
        assert!(matches!(err, SiteError::MissingContent(_)));
    }

    #[test]
    fn test_content_file_is_not_content_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("content.md"), "nope").unwrap();

        assert!(DirectoryStructure::discover(dir.path()).is_err());
    }
}
