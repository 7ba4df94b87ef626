use crate::directory::walker::FsEntry;

/// Reserved top-level entries of a site source directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryType {
    /// Layout templates directory
    Layouts,

    /// Partial templates directory
    Partials,

    /// Helper templates directory
    Helpers,

    /// Content tree mirrored into the output
    Content,

    /// Static files copied verbatim to `<output>/static`
    Static,

    /// Favicon file copied to the output root
    Favicon,

    /// Metadata defaults file
    Defaults,
}

impl DirectoryType {
    /// Classify a top-level entry by its reserved name
    pub fn classify(entry: &FsEntry) -> Option<Self> {
        if entry.is_dir() {
            return match entry.name.as_str() {
                "layouts" => Some(DirectoryType::Layouts),
                "partials" => Some(DirectoryType::Partials),
                "helpers" => Some(DirectoryType::Helpers),
                "content" => Some(DirectoryType::Content),
                "static" => Some(DirectoryType::Static),
                _ => None,
            };
        }

        match entry.name.as_str() {
            "favicon" => Some(DirectoryType::Favicon),
            "defaults" => Some(DirectoryType::Defaults),
            _ => None,
        }
    }
}
