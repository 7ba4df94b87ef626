use std::fs;
use std::path::Path;

use crate::utils::error::{SiteError, SiteResult};

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> SiteResult<()> {
    fs::create_dir_all(path.as_ref()).map_err(|e| SiteError::io(&path, e))
}

/// Remove a directory and all its contents
pub fn remove_directory<P: AsRef<Path>>(path: P) -> SiteResult<()> {
    if path.as_ref().is_dir() {
        fs::remove_dir_all(path.as_ref()).map_err(|e| SiteError::io(&path, e))?;
    }
    Ok(())
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> SiteResult<String> {
    fs::read_to_string(path.as_ref()).map_err(|e| SiteError::io(&path, e))
}

/// Write a string to a file, creating parent directories as needed
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> SiteResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        create_directory(parent)?;
    }

    fs::write(path.as_ref(), contents).map_err(|e| SiteError::io(&path, e))
}

/// Copy a file from source to destination, creating parent directories as needed
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> SiteResult<u64> {
    if let Some(parent) = to.as_ref().parent() {
        create_directory(parent)?;
    }

    fs::copy(from.as_ref(), to.as_ref()).map_err(|e| SiteError::io(&from, e))
}

/// Copy the contents of a directory into another directory
pub fn copy_directory<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> SiteResult<u64> {
    create_directory(&to)?;

    let options = fs_extra::dir::CopyOptions::new()
        .overwrite(true)
        .content_only(true);

    fs_extra::dir::copy(from.as_ref(), to.as_ref(), &options).map_err(|e| {
        SiteError::io(&from, std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_file_creates_parents() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("a/b/c.txt");
        write_file(&target, "hello").unwrap();
        assert_eq!(read_file(&target).unwrap(), "hello");
    }

    #[test]
    fn test_copy_directory_contents() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("static");
        write_file(src.join("css/site.css"), "body {}").unwrap();

        let dest = dir.path().join("out/static");
        copy_directory(&src, &dest).unwrap();

        assert_eq!(read_file(dest.join("css/site.css")).unwrap(), "body {}");
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let err = read_file("/definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
