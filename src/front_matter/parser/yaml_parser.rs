use lazy_static::lazy_static;
use log::warn;
use regex::Regex;
use serde_yaml::Value;

use crate::front_matter::types::Metadata;

lazy_static! {
    // Opening dash line, shortest span, closing dash line.
    static ref FRONT_MATTER_REGEX: Regex =
        Regex::new(r"(?s)\A-{3,}[ \t]*\r?\n(?:(.*?)\r?\n)?-{3,}[ \t]*(?:\r?\n|\z)").unwrap();
}

/// A document split into metadata and body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extracted {
    pub metadata: Metadata,
    pub body: String,
}

/// Split a raw document into its frontmatter metadata and its body.
///
/// Frontmatter is optional: without a delimiter block the whole trimmed
/// document is the body. A leading byte order mark is dropped first. A block whose YAML does not parse into a mapping
/// yields empty metadata; the body is still split off.
pub fn extract(raw: &str) -> Extracted {
    let trimmed = raw.trim_start_matches('\u{feff}').trim();

    let Some(captures) = FRONT_MATTER_REGEX.captures(trimmed) else {
        return Extracted {
            metadata: Metadata::new(),
            body: trimmed.to_string(),
        };
    };

    // Group 0 always exists for a match
    let block_end = captures.get(0).map(|m| m.end()).unwrap_or(0);
    let yaml = captures.get(1).map(|m| m.as_str()).unwrap_or("");

    Extracted {
        metadata: parse_yaml(yaml),
        body: trimmed[block_end..].trim().to_string(),
    }
}

/// Parse a YAML block into metadata, degrading to empty metadata on failure
pub fn parse_yaml(yaml: &str) -> Metadata {
    match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(map)) => Metadata::from_mapping(map),
        // An empty block parses as null
        Ok(Value::Null) => Metadata::new(),
        Ok(other) => {
            warn!("Front matter is not a key-value mapping (got {:?}), ignoring it", other);
            Metadata::new()
        }
        Err(e) => {
            warn!("Error parsing front matter: {}", e);
            Metadata::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_front_matter() {
        let doc = "---\nlayout: base\ntitle: Hi\n---\n# Hello";
        let extracted = extract(doc);

        assert_eq!(extracted.metadata.layout().as_deref(), Some("base"));
        assert_eq!(extracted.metadata.get("title").and_then(|v| v.as_str()), Some("Hi"));
        assert_eq!(extracted.body, "# Hello");
    }

    #[test]
    fn test_no_front_matter_is_whole_trimmed_document() {
        let doc = "\n\n  # Title\n\nSome text ---\n";
        let extracted = extract(doc);

        assert!(extracted.metadata.is_empty());
        assert_eq!(extracted.body, doc.trim());

        // Re-extracting the body is a no-op
        assert_eq!(extract(&extracted.body), extracted);
    }

    #[test]
    fn test_body_excludes_delimiters() {
        let doc = "-----\ntitle: Long dashes\n-----\n\nBody text\n\n---\n\nAfter a rule";
        let extracted = extract(doc);

        assert_eq!(extracted.metadata.get("title").and_then(|v| v.as_str()), Some("Long dashes"));
        assert!(!extracted.body.starts_with("---"));
        assert_eq!(extracted.body, "Body text\n\n---\n\nAfter a rule");
    }

    #[test]
    fn test_only_front_matter_gives_empty_body() {
        let extracted = extract("---\ntitle: Alone\n---\n");
        assert_eq!(extracted.body, "");
        assert_eq!(extracted.metadata.len(), 1);
    }

    #[test]
    fn test_empty_block() {
        let extracted = extract("---\n---\nbody");
        assert!(extracted.metadata.is_empty());
        assert_eq!(extracted.body, "body");
    }

    #[test]
    fn test_malformed_yaml_gives_empty_metadata() {
        let extracted = extract("---\ntitle: [unclosed\n---\nstill here");
        assert!(extracted.metadata.is_empty());
        assert_eq!(extracted.body, "still here");
    }

    #[test]
    fn test_unclosed_block_is_body() {
        let doc = "---\ntitle: never closed\n\ntext";
        let extracted = extract(doc);
        assert!(extracted.metadata.is_empty());
        assert_eq!(extracted.body, doc);
    }

    #[test]
    fn test_crlf_line_endings() {
        let extracted = extract("---\r\nlayout: base\r\n---\r\nHello\r\n");
        assert_eq!(extracted.metadata.layout().as_deref(), Some("base"));
        assert_eq!(extracted.body, "Hello");
    }

    #[test]
    fn test_byte_order_mark_before_front_matter() {
        let extracted = extract("\u{feff}---\nlayout: base\n---\nHello");
        assert_eq!(extracted.metadata.layout().as_deref(), Some("base"));
        assert_eq!(extracted.body, "Hello");

        let extracted = extract("\u{feff}# Title");
        assert_eq!(extracted.body, "# Title");
    }

    #[test]
    fn test_scalar_front_matter_ignored() {
        let extracted = extract("---\njust a string\n---\nbody");
        assert!(extracted.metadata.is_empty());
        assert_eq!(extracted.body, "body");
    }
}
