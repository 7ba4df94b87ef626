use std::collections::HashSet;

use liquid::model::Value;
use log::{debug, warn};

use crate::builder::site::context::PageContext;
use crate::builder::site::navigation::{NavFolder, NavPage};
use crate::builder::site::tree::{SiteFile, SiteNode};
use crate::builder::types::BuildStats;
use crate::template::Renderer;
use crate::utils::error::SiteResult;
use crate::utils::fs;

/// Emits a site tree, walking it in lockstep with its navigation context
pub struct SiteWriter<'a> {
    renderer: &'a Renderer,
    site: Value,
    stats: &'a mut BuildStats,
}

impl<'a> SiteWriter<'a> {
    pub fn new(renderer: &'a Renderer, nav: &NavFolder, stats: &'a mut BuildStats) -> Self {
        SiteWriter { renderer, site: nav.to_liquid(), stats }
    }

    /// Write a folder's files, then its subfolders. Stops at the first failure.
    pub fn write(&mut self, node: &SiteNode, nav: &NavFolder) -> SiteResult<()> {
        fs::create_directory(&node.output_path)?;
        let folder = nav.to_liquid();

        let mut seen = HashSet::new();
        for (file, page) in node.files.iter().zip(&nav.pages) {
            if !seen.insert(&file.output_path) {
                warn!(
                    "{} overwrites an earlier file at {}",
                    file.source_path.display(),
                    file.output_path.display()
                );
            }

            self.write_file(file, page, &folder)
                .map_err(|e| e.in_page(&file.source_path))?;
        }

        for (child, child_nav) in node.folders.iter().zip(&nav.subfolders) {
            self.write(child, child_nav)?;
        }

        Ok(())
    }

    fn write_file(&mut self, file: &SiteFile, page: &NavPage, folder: &Value) -> SiteResult<()> {
        let (Some(format), Some(staged)) = (file.format(), file.staged_path.as_ref()) else {
            debug!("Copying {}", file.source_path.display());
            fs::copy_file(&file.source_path, &file.output_path)?;
            self.stats.files_copied += 1;
            return Ok(());
        };

        debug!("Rendering {}", file.source_path.display());
        let body = fs::read_file(staged)?;
        let context = PageContext::new(file, page, folder, &self.site);
        let content = self.renderer.render_body(&body, format, &context.globals())?;

        let html = match file.metadata.layout() {
            Some(layout) => {
                let context = context.with_content(content);
                self.renderer.render_layout(&layout, &context.globals())?
            }
            None => {
                debug!("{} has no layout", file.source_path.display());
                content
            }
        };

        fs::write_file(&file.output_path, &html)?;
        self.stats.pages_rendered += 1;
        Ok(())
    }
}
