/// How a content file's body is turned into HTML
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    /// `.md`: template expansion, then Markdown
    Markdown,
    /// `.hbs`: template expansion only
    Template,
    /// `.html`: emitted as written
    Passthrough,
}

impl ContentFormat {
    /// Format for a file extension, `None` for files that are copied verbatim
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "md" => Some(ContentFormat::Markdown),
            "hbs" => Some(ContentFormat::Template),
            "html" => Some(ContentFormat::Passthrough),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        assert_eq!(ContentFormat::from_extension("md"), Some(ContentFormat::Markdown));
        assert_eq!(ContentFormat::from_extension("MD"), Some(ContentFormat::Markdown));
        assert_eq!(ContentFormat::from_extension("hbs"), Some(ContentFormat::Template));
        assert_eq!(ContentFormat::from_extension("html"), Some(ContentFormat::Passthrough));
        assert_eq!(ContentFormat::from_extension("json"), None);
        assert_eq!(ContentFormat::from_extension(""), None);
    }
}
