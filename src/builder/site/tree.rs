use std::path::{Path, PathBuf};
use log::debug;

use crate::directory::FsEntry;
use crate::front_matter::{extract, Metadata};
use crate::template::ContentFormat;
use crate::utils::error::SiteResult;
use crate::utils::fs;

/// One content file and where it goes
#[derive(Debug, Clone)]
pub struct SiteFile {
    pub name: String,
    pub filename: String,
    pub extension: String,
    pub source_path: PathBuf,
    pub output_path: PathBuf,
    /// Extracted body in the scratch directory, `None` for copied files
    pub staged_path: Option<PathBuf>,
    pub metadata: Metadata,
    pub copy_without_compile: bool,
}

impl SiteFile {
    pub fn format(&self) -> Option<ContentFormat> {
        ContentFormat::from_extension(&self.extension)
    }

    /// Name of the emitted file: `<name>.html` or the original filename
    pub fn output_filename(&self) -> String {
        if self.copy_without_compile {
            self.filename.clone()
        } else {
            format!("{}.html", self.name)
        }
    }
}

/// One content directory, mirroring `content/`
#[derive(Debug, Clone)]
pub struct SiteNode {
    pub name: String,
    pub output_path: PathBuf,
    /// Path relative to the content root, empty for the root itself
    pub rel_path: PathBuf,
    pub files: Vec<SiteFile>,
    pub folders: Vec<SiteNode>,
}

/// Turns the raw content entries into a [`SiteNode`] tree.
///
/// Bodies of supported files are staged under `scratch` at the same
/// relative path as their source.
pub struct ContentReader<'a> {
    defaults: &'a Metadata,
    scratch: &'a Path,
    skipped: usize,
}

impl<'a> ContentReader<'a> {
    pub fn new(defaults: &'a Metadata, scratch: &'a Path) -> Self {
        ContentReader { defaults, scratch, skipped: 0 }
    }

    /// Number of files dropped so far by `skip: true`
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn read(&mut self, content: &FsEntry, output: &Path) -> SiteResult<SiteNode> {
        self.read_node(content, output.to_path_buf(), PathBuf::new())
    }

    fn read_node(&mut self, entry: &FsEntry, output_path: PathBuf, rel_path: PathBuf) -> SiteResult<SiteNode> {
        let mut files = Vec::new();
        let mut folders = Vec::new();

        for child in &entry.children {
            if child.is_dir() {
                let folder = self.read_node(
                    child,
                    output_path.join(&child.name),
                    rel_path.join(&child.name),
                )?;
                folders.push(folder);
            } else if let Some(file) = self.read_file(child, &output_path, &rel_path)? {
                files.push(file);
            }
        }

        Ok(SiteNode {
            name: entry.name.clone(),
            output_path,
            rel_path,
            files,
            folders,
        })
    }

    fn read_file(&mut self, entry: &FsEntry, output_dir: &Path, rel_dir: &Path) -> SiteResult<Option<SiteFile>> {
        let mut file = SiteFile {
            name: entry.name.clone(),
            filename: entry.filename.clone(),
            extension: entry.extension.clone(),
            source_path: entry.path.clone(),
            output_path: PathBuf::new(),
            staged_path: None,
            metadata: Metadata::new(),
            copy_without_compile: ContentFormat::from_extension(&entry.extension).is_none(),
        };
        file.output_path = output_dir.join(file.output_filename());

        if file.copy_without_compile {
            debug!("Will copy {}", entry.path.display());
            return Ok(Some(file));
        }

        let raw = fs::read_file(&entry.path)?;
        let extracted = extract(&raw);
        let metadata = extracted.metadata.merged_over(self.defaults);

        if metadata.skip() {
            debug!("Skipping {}", entry.path.display());
            self.skipped += 1;
            return Ok(None);
        }

        let staged_path = self.scratch.join(rel_dir).join(&entry.filename);
        fs::write_file(&staged_path, &extracted.body)?;

        file.metadata = metadata;
        file.staged_path = Some(staged_path);
        Ok(Some(file))
    }
}
