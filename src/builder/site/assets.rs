use std::path::Path;
use log::{debug, info};

use crate::directory::DirectoryStructure;
use crate::utils::error::SiteResult;
use crate::utils::fs;

/// Copy `static/` to `<output>/static` unless `skip_static` is set
pub fn copy_static(dirs: &DirectoryStructure, output: &Path, skip_static: bool) -> SiteResult<bool> {
    let Some(static_dir) = &dirs.static_dir else {
        return Ok(false);
    };

    if skip_static {
        info!("Skipping static files");
        return Ok(false);
    }

    let destination = output.join("static");
    debug!("Copying {} to {}", static_dir.path.display(), destination.display());
    fs::copy_directory(&static_dir.path, &destination)?;
    Ok(true)
}

/// Copy the favicon to the output root under its own filename
pub fn copy_favicon(dirs: &DirectoryStructure, output: &Path) -> SiteResult<bool> {
    let Some(favicon) = &dirs.favicon else {
        return Ok(false);
    };

    fs::copy_file(&favicon.path, output.join(&favicon.filename))?;
    Ok(true)
}
