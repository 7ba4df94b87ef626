use std::path::{Path, PathBuf};
use log::debug;
use walkdir::WalkDir;

use crate::utils::error::{SiteError, SiteResult};

/// Whether an entry is a file or a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One node of the raw source tree
#[derive(Debug, Clone)]
pub struct FsEntry {
    pub kind: EntryKind,
    /// File name without extension
    pub name: String,
    /// Extension without the leading dot, empty when there is none
    pub extension: String,
    /// File name with extension
    pub filename: String,
    /// Absolute path of the entry
    pub path: PathBuf,
    /// Children, only populated for directories
    pub children: Vec<FsEntry>,
}

impl FsEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Iterate over the direct children that are files
    pub fn files(&self) -> impl Iterator<Item = &FsEntry> {
        self.children.iter().filter(|c| c.is_file())
    }
}

/// Recursively list `path` into a tree of entries.
///
/// The whole tree is materialized before returning. Children are sorted by
/// file name; symlinks are followed and anything that is neither a file nor a
/// directory is left out.
pub fn walk<P: AsRef<Path>>(path: P) -> SiteResult<Vec<FsEntry>> {
    let root = path.as_ref();
    let root = root.canonicalize().map_err(|e| SiteError::io(root, e))?;

    let mut entries = Vec::new();
    let walker = WalkDir::new(&root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for item in walker {
        let item = item.map_err(|e| {
            let at = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
            SiteError::io(at, e.into())
        })?;

        let file_type = item.file_type();
        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            debug!("Skipping special file {}", item.path().display());
            continue;
        };

        let entry_path = item.path().to_path_buf();
        let children = match kind {
            EntryKind::Directory => walk(&entry_path)?,
            EntryKind::File => Vec::new(),
        };

        entries.push(make_entry(kind, entry_path, children));
    }

    Ok(entries)
}

fn make_entry(kind: EntryKind, path: PathBuf, children: Vec<FsEntry>) -> FsEntry {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    // Directories keep their full name, dotted or not
    let (name, extension) = match kind {
        EntryKind::Directory => (filename.clone(), String::new()),
        EntryKind::File => split_filename(&filename),
    };

    FsEntry { kind, name, extension, filename, path, children }
}

/// Split `post.md` into (`post`, `md`). Dotfiles such as `.nojekyll` have no extension.
fn split_filename(filename: &str) -> (String, String) {
    match filename.rfind('.') {
        Some(0) | None => (filename.to_string(), String::new()),
        Some(idx) => (filename[..idx].to_string(), filename[idx + 1..].to_string()),
    }
}
