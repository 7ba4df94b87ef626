use std::path::PathBuf;

/// Default source directory
pub fn default_input() -> PathBuf {
    PathBuf::from("./")
}

/// Default destination directory
pub fn default_output() -> PathBuf {
    PathBuf::from("./site")
}

pub fn default_true() -> bool {
    true
}
