use std::time::Duration;

/// Counters gathered while building a site
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BuildStats {
    /// Supported files rendered to HTML
    pub pages_rendered: usize,
    /// Files copied without compilation
    pub files_copied: usize,
    /// Files dropped by `skip: true`
    pub pages_skipped: usize,
    /// Wall time of the build
    pub duration: Duration,
}
