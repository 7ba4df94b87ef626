use std::time::Instant;
use log::{debug, info, warn};
use tempfile::TempDir;

use crate::builder::site::assets::{copy_favicon, copy_static};
use crate::builder::site::navigation::NavFolder;
use crate::builder::site::tree::ContentReader;
use crate::builder::site::writer::SiteWriter;
use crate::builder::types::BuildStats;
use crate::config::Config;
use crate::directory::{clean_destination, DirectoryStructure, FsEntry};
use crate::front_matter::load_defaults;
use crate::template::{HelperLoader, Renderer, TemplateHelperLoader};
use crate::utils::error::{SiteError, SiteResult};
use crate::utils::fs;

/// Builds one site from a [`Config`].
///
/// Each call to [`SiteBuilder::build`] uses a fresh renderer and scratch
/// directory; nothing carries over between builds.
pub struct SiteBuilder<'a> {
    config: &'a Config,
    helper_loader: Box<dyn HelperLoader + 'a>,
}

impl<'a> SiteBuilder<'a> {
    pub fn new(config: &'a Config) -> Self {
        SiteBuilder { config, helper_loader: Box::new(TemplateHelperLoader) }
    }

    /// Replace the strategy used to load files under `helpers/`
    pub fn with_helper_loader(mut self, loader: impl HelperLoader + 'a) -> Self {
        self.helper_loader = Box::new(loader);
        self
    }

    pub fn build(&self) -> SiteResult<BuildStats> {
        let start_time = Instant::now();
        let config = self.config;
        let mut stats = BuildStats::default();

        clean_destination(config)?;

        let dirs = DirectoryStructure::discover(&config.input)?;
        info!("Building {} into {}", dirs.source.display(), config.output.display());

        let defaults = load_defaults(dirs.defaults.as_ref().map(|d| d.path.as_path()));
        let renderer = self.create_renderer(&dirs)?;

        // Removed when dropped, including on the error paths below
        let scratch = create_scratch(config)?;
        debug!("Staging bodies in {}", scratch.path().display());

        info!("Reading content...");
        let mut reader = ContentReader::new(&defaults, scratch.path());
        let tree = reader.read(&dirs.content, &config.output)?;
        stats.pages_skipped = reader.skipped();

        let nav = NavFolder::from_node(&tree);

        info!("Writing pages...");
        SiteWriter::new(&renderer, &nav, &mut stats).write(&tree, &nav)?;

        if copy_static(&dirs, &config.output, config.skip_static)? {
            info!("Copied static files");
        }
        if copy_favicon(&dirs, &config.output)? {
            debug!("Copied favicon");
        }

        if let Err(e) = scratch.close() {
            warn!("Failed to remove scratch directory: {}", e);
        }

        stats.duration = start_time.elapsed();
        info!(
            "Site built in {:.2?}: {} pages rendered, {} files copied, {} skipped",
            stats.duration, stats.pages_rendered, stats.files_copied, stats.pages_skipped
        );

        Ok(stats)
    }

    fn create_renderer(&self, dirs: &DirectoryStructure) -> SiteResult<Renderer> {
        let mut renderer = Renderer::new(&self.config.markdown)?;

        // Helpers first so partials and layouts compile against their filters
        for entry in artifact_files(dirs.helpers.as_ref()) {
            match self.helper_loader.load(entry) {
                Ok(helper) => renderer.register_helper(&entry.name, helper),
                Err(e) => warn!("Failed to load helper {}: {}", entry.filename, e),
            }
        }

        for entry in artifact_files(dirs.partials.as_ref()) {
            renderer.register_partial(&entry.name, &fs::read_file(&entry.path)?);
        }

        for entry in artifact_files(dirs.layouts.as_ref()) {
            renderer.register_layout(&entry.name, &fs::read_file(&entry.path)?);
        }
        debug!("Registered layouts, partials and helpers");

        Ok(renderer)
    }
}

/// Build the site described by `config` with the default helper loader
pub fn build_site(config: &Config) -> SiteResult<BuildStats> {
    SiteBuilder::new(config).build()
}

/// Files directly inside an artifact directory, in file-name order
fn artifact_files(dir: Option<&FsEntry>) -> impl Iterator<Item = &FsEntry> {
    dir.into_iter().flat_map(|d| d.files())
}

fn create_scratch(config: &Config) -> SiteResult<TempDir> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("foldsite-");

    match &config.scratch_root {
        Some(root) => {
            fs::create_directory(root)?;
            builder.tempdir_in(root).map_err(|e| SiteError::io(root, e))
        }
        None => builder.tempdir().map_err(|e| SiteError::io(std::env::temp_dir(), e)),
    }
}
