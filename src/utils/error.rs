use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Boxed result used by the CLI and server plumbing
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Result type for the build pipeline
pub type SiteResult<T> = Result<T, SiteError>;

/// Error types for site builds
#[derive(Debug)]
pub enum SiteError {
    /// IO error tied to the path that caused it
    Io { path: PathBuf, source: io::Error },
    /// The input root has no `content` directory
    MissingContent(PathBuf),
    /// A page asked for a layout that is not registered (or failed to compile)
    LayoutNotFound(String),
    /// Template parsing or rendering error
    Template(String),
    /// Configuration error
    Config(String),
    /// A failure while emitting one content file
    Page { path: PathBuf, source: Box<SiteError> },
}

impl SiteError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        SiteError::Io { path: path.as_ref().to_path_buf(), source }
    }

    /// Attach the offending content file to an error raised while writing it
    pub fn in_page(self, path: impl AsRef<Path>) -> Self {
        SiteError::Page { path: path.as_ref().to_path_buf(), source: Box::new(self) }
    }

    /// Convert a liquid error into a template error
    pub fn template(err: impl fmt::Display) -> Self {
        SiteError::Template(err.to_string())
    }
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::Io { path, source } => write!(f, "IO error at {}: {}", path.display(), source),
            SiteError::MissingContent(root) => {
                write!(f, "No content directory found in {}", root.display())
            }
            SiteError::LayoutNotFound(name) => write!(f, "Layout not found: {}", name),
            SiteError::Template(msg) => write!(f, "Template error: {}", msg),
            SiteError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SiteError::Page { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl Error for SiteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SiteError::Io { source, .. } => Some(source),
            SiteError::Page { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
