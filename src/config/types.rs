use std::path::PathBuf;
use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Markdown rendering options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarkdownConfig {
    /// Give headings slug ids (`<h2 id="setup">`)
    #[serde(default = "defaults::default_true")]
    pub heading_ids: bool,

    /// Highlight fenced code blocks with syntect
    #[serde(default = "defaults::default_true")]
    pub highlight: bool,

    /// Turn straight quotes and dashes into typographic ones
    #[serde(default)]
    pub smart_punctuation: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        MarkdownConfig {
            heading_ids: true,
            highlight: true,
            smart_punctuation: false,
        }
    }
}

/// Build configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Source directory holding `content/`, `layouts/` and friends
    #[serde(default = "defaults::default_input")]
    pub input: PathBuf,

    /// Destination directory for the generated site
    #[serde(default = "defaults::default_output")]
    pub output: PathBuf,

    /// Do not copy `static/` into the output
    #[serde(default)]
    pub skip_static: bool,

    /// Remove the output directory before building
    #[serde(default)]
    pub clean: bool,

    /// Parent directory for per-build scratch space (system temp dir when unset)
    #[serde(default)]
    pub scratch_root: Option<PathBuf>,

    /// Markdown options
    #[serde(default)]
    pub markdown: MarkdownConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: defaults::default_input(),
            output: defaults::default_output(),
            skip_static: false,
            clean: false,
            scratch_root: None,
            markdown: MarkdownConfig::default(),
        }
    }
}
