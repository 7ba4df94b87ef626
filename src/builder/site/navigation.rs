use liquid::model::Value;
use liquid::Object;

use crate::builder::site::tree::{SiteFile, SiteNode};
use crate::front_matter::Metadata;

/// A content file as seen by templates through `site` and `folder`
#[derive(Debug, Clone)]
pub struct NavPage {
    pub name: String,
    pub filename: String,
    /// Site-relative URL of the emitted file, e.g. `/blog/post.html`
    pub path: String,
    pub extension: String,
    /// Empty for copied files
    pub staged_path: String,
    pub copied: bool,
    pub metadata: Metadata,
}

/// A content folder as seen by templates
#[derive(Debug, Clone)]
pub struct NavFolder {
    pub name: String,
    /// `/` for the root, `/blog` below it
    pub path: String,
    pub absolute_path: String,
    pub pages: Vec<NavPage>,
    pub subfolders: Vec<NavFolder>,
}

impl NavFolder {
    /// Mirror a site tree. `pages` and `subfolders` keep the order of
    /// `files` and `folders` so both trees can be walked together.
    pub fn from_node(node: &SiteNode) -> Self {
        let path = url_path(&url_segments(node), None);

        NavFolder {
            name: node.name.clone(),
            path,
            absolute_path: node.output_path.display().to_string(),
            pages: node.files.iter().map(|f| NavPage::from_file(node, f)).collect(),
            subfolders: node.folders.iter().map(NavFolder::from_node).collect(),
        }
    }

    pub fn to_liquid(&self) -> Value {
        let mut obj = Object::new();
        obj.insert("name".into(), Value::scalar(self.name.clone()));
        obj.insert("path".into(), Value::scalar(self.path.clone()));
        obj.insert("absolute_path".into(), Value::scalar(self.absolute_path.clone()));
        obj.insert(
            "pages".into(),
            Value::Array(self.pages.iter().map(NavPage::to_liquid).collect()),
        );
        obj.insert(
            "subfolders".into(),
            Value::Array(self.subfolders.iter().map(NavFolder::to_liquid).collect()),
        );
        Value::Object(obj)
    }
}

impl NavPage {
    fn from_file(node: &SiteNode, file: &SiteFile) -> Self {
        let output_filename = file.output_filename();

        NavPage {
            name: file.name.clone(),
            filename: file.filename.clone(),
            path: url_path(&url_segments(node), Some(&output_filename)),
            extension: file.extension.clone(),
            staged_path: file
                .staged_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            copied: file.copy_without_compile,
            metadata: file.metadata.clone(),
        }
    }

    pub fn to_liquid(&self) -> Value {
        let mut obj = Object::new();
        obj.insert("name".into(), Value::scalar(self.name.clone()));
        obj.insert("filename".into(), Value::scalar(self.filename.clone()));
        obj.insert("path".into(), Value::scalar(self.path.clone()));
        obj.insert("extension".into(), Value::scalar(self.extension.clone()));
        obj.insert("staged_path".into(), Value::scalar(self.staged_path.clone()));
        obj.insert("copied".into(), Value::scalar(self.copied));
        obj.insert("metadata".into(), Value::Object(self.metadata.to_liquid()));
        Value::Object(obj)
    }
}

fn url_segments(node: &SiteNode) -> Vec<String> {
    node.rel_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect()
}

fn url_path(segments: &[String], leaf: Option<&str>) -> String {
    let mut parts: Vec<&str> = segments.iter().map(String::as_str).collect();
    if let Some(leaf) = leaf {
        parts.push(leaf);
    }
    format!("/{}", parts.join("/"))
}
