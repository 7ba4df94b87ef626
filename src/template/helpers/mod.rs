use std::fmt;
use std::sync::Arc;
use liquid::model::Value;
use liquid::{Object, ParserBuilder, Template};

use crate::directory::FsEntry;
use crate::utils::error::{SiteError, SiteResult};
use crate::utils::fs;

/// A named function callable from templates.
///
/// Exposed as a Liquid filter: `{{ page.title | shout }}` calls the `shout`
/// helper with the title as `input`, and `{{ x | wrap: "[", "]" }}` passes
/// `["[", "]"]` as `args`.
pub trait Helper: Send + Sync + fmt::Debug {
    fn call(&self, input: &str, args: &[String]) -> SiteResult<String>;
}

/// Helper backed by a Rust closure
pub struct FnHelper<F> {
    func: F,
}

impl<F> FnHelper<F>
where
    F: Fn(&str, &[String]) -> String + Send + Sync,
{
    pub fn new(func: F) -> Self {
        FnHelper { func }
    }
}

impl<F> fmt::Debug for FnHelper<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnHelper")
    }
}

impl<F> Helper for FnHelper<F>
where
    F: Fn(&str, &[String]) -> String + Send + Sync,
{
    fn call(&self, input: &str, args: &[String]) -> SiteResult<String> {
        Ok((self.func)(input, args))
    }
}

/// Helper defined by a Liquid template file.
///
/// The template sees `input` and `args` and only the standard Liquid filters.
/// Trailing line breaks of the rendered output are dropped so a helper file
/// ending in a newline can be used inline.
pub struct TemplateHelper {
    name: String,
    template: Template,
}

impl TemplateHelper {
    pub fn compile(name: &str, source: &str) -> SiteResult<Self> {
        let parser = ParserBuilder::with_stdlib()
            .build()
            .map_err(SiteError::template)?;

        let template = parser.parse(source).map_err(|e| {
            SiteError::Template(format!("Failed to parse helper {}: {}", name, e))
        })?;

        Ok(TemplateHelper { name: name.to_string(), template })
    }
}

impl fmt::Debug for TemplateHelper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateHelper").field("name", &self.name).finish()
    }
}

impl Helper for TemplateHelper {
    fn call(&self, input: &str, args: &[String]) -> SiteResult<String> {
        let mut globals = Object::new();
        globals.insert("input".into(), Value::scalar(input.to_string()));
        globals.insert(
            "args".into(),
            Value::Array(args.iter().map(|a| Value::scalar(a.clone())).collect()),
        );

        let rendered = self.template.render(&globals).map_err(|e| {
            SiteError::Template(format!("Helper {} failed: {}", self.name, e))
        })?;

        Ok(rendered.trim_end_matches(['\n', '\r']).to_string())
    }
}

/// Strategy for turning a `helpers/` entry into a callable helper
pub trait HelperLoader {
    fn load(&self, entry: &FsEntry) -> SiteResult<Arc<dyn Helper>>;
}

/// Loads every helper file as a [`TemplateHelper`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateHelperLoader;

impl HelperLoader for TemplateHelperLoader {
    fn load(&self, entry: &FsEntry) -> SiteResult<Arc<dyn Helper>> {
        let source = fs::read_file(&entry.path)?;
        Ok(Arc::new(TemplateHelper::compile(&entry.name, &source)?))
    }
}
