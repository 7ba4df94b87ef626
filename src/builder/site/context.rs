use std::collections::BTreeMap;

use liquid::model::{KStringRef, Value};
use liquid::{Object, ValueView};

use crate::builder::site::navigation::NavPage;
use crate::builder::site::tree::SiteFile;

/// Variables available to a page body, and to its layout once `content` is set.
///
/// Metadata keys are spread at the top level so `{{ title }}` works; the
/// reserved keys are inserted afterwards and take precedence. `folder` and
/// `site` are borrowed from the writer, so rendering a page never copies the
/// navigation tree.
pub struct PageContext<'a> {
    page: Object,
    folder: &'a Value,
    site: &'a Value,
}

impl<'a> PageContext<'a> {
    pub fn new(file: &SiteFile, page: &NavPage, folder: &'a Value, site: &'a Value) -> Self {
        let metadata = file.metadata.to_liquid();
        let mut ctx = metadata.clone();

        ctx.insert("metadata".into(), Value::Object(metadata));
        ctx.insert("name".into(), Value::scalar(file.name.clone()));
        ctx.insert("filename".into(), Value::scalar(file.filename.clone()));
        ctx.insert("extension".into(), Value::scalar(file.extension.clone()));
        ctx.insert("path".into(), Value::scalar(page.path.clone()));
        ctx.insert("source_path".into(), Value::scalar(file.source_path.display().to_string()));
        ctx.insert("staged_path".into(), Value::scalar(page.staged_path.clone()));

        PageContext { page: ctx, folder, site }
    }

    /// Adds the rendered body as `content` for the layout pass
    pub fn with_content(mut self, content: String) -> Self {
        self.page.insert("content".into(), Value::scalar(content));
        self
    }

    /// Template globals as a map of references into this context
    pub fn globals(&self) -> BTreeMap<KStringRef<'_>, &dyn ValueView> {
        let mut globals: BTreeMap<KStringRef<'_>, &dyn ValueView> = self
            .page
            .iter()
            .map(|(key, value)| (KStringRef::from(key.as_str()), value as &dyn ValueView))
            .collect();
        globals.insert(KStringRef::from("folder"), self.folder);
        globals.insert(KStringRef::from("site"), self.site);
        globals
    }
}
