use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use liquid::partials::{EagerCompiler, InMemorySource};
use liquid::{ObjectView, Parser, ParserBuilder, Template};
use log::{debug, warn};

use crate::config::MarkdownConfig;
use crate::markdown::MarkdownRenderer;
use crate::template::filters::register_filters;
use crate::template::format::ContentFormat;
use crate::template::helpers::Helper;
use crate::utils::error::{SiteError, SiteResult};

type Partials = EagerCompiler<InMemorySource>;

enum Layout {
    Compiled(Template),
    /// Registered but failed to compile; reported as not found when used
    Invalid(String),
}

/// Registry of layouts, partials and helpers plus the page renderers.
///
/// Partials and helpers are baked into the Liquid parser, so registering one
/// rebuilds the parser and recompiles every registered layout. Registering a
/// name that already exists replaces the earlier definition.
pub struct Renderer {
    parser: Parser,
    markdown_config: MarkdownConfig,
    markdown: MarkdownRenderer<'static>,
    partials: BTreeMap<String, String>,
    helpers: BTreeMap<String, Arc<dyn Helper>>,
    layout_sources: BTreeMap<String, String>,
    layouts: HashMap<String, Layout>,
}

impl Renderer {
    pub fn new(markdown_config: &MarkdownConfig) -> SiteResult<Self> {
        let partials = BTreeMap::new();
        let helpers = BTreeMap::new();
        let parser = build_parser(&partials, &helpers, markdown_config)?;

        Ok(Renderer {
            parser,
            markdown_config: markdown_config.clone(),
            markdown: MarkdownRenderer::new(markdown_config),
            partials,
            helpers,
            layout_sources: BTreeMap::new(),
            layouts: HashMap::new(),
        })
    }

    /// Register a layout under `name`.
    ///
    /// A layout that fails to compile is remembered as invalid; rendering
    /// with it later yields [`SiteError::LayoutNotFound`].
    pub fn register_layout(&mut self, name: &str, source: &str) {
        self.layout_sources.insert(name.to_string(), source.to_string());
        let layout = self.compile_layout(name, source);
        self.layouts.insert(name.to_string(), layout);
    }

    /// Register a partial, usable as `{% include "name" %}`
    pub fn register_partial(&mut self, name: &str, source: &str) {
        let previous = self.partials.insert(name.to_string(), source.to_string());
        if self.rebuild().is_err() {
            // Keep the renderer usable with the last good partial set
            match previous {
                Some(source) => self.partials.insert(name.to_string(), source),
                None => self.partials.remove(name),
            };
        }
    }

    /// Register a helper, usable as a filter: `{{ value | name: arg }}`
    pub fn register_helper(&mut self, name: &str, helper: Arc<dyn Helper>) {
        let previous = self.helpers.insert(name.to_string(), helper);
        if self.rebuild().is_err() {
            match previous {
                Some(helper) => self.helpers.insert(name.to_string(), helper),
                None => self.helpers.remove(name),
            };
        }
    }

    /// Expand a page body according to its format
    pub fn render_body(&self, source: &str, format: ContentFormat, context: &dyn ObjectView) -> SiteResult<String> {
        match format {
            ContentFormat::Passthrough => Ok(source.to_string()),
            ContentFormat::Template => self.render_template(source, context),
            ContentFormat::Markdown => {
                let expanded = self.render_template(source, context)?;
                Ok(self.markdown.render(&expanded))
            }
        }
    }

    /// Render a one-off template string against `context`
    pub fn render_template(&self, source: &str, context: &dyn ObjectView) -> SiteResult<String> {
        let template = self.parser.parse(source).map_err(SiteError::template)?;
        template.render(context).map_err(SiteError::template)
    }

    /// Render the layout registered as `name`
    pub fn render_layout(&self, name: &str, context: &dyn ObjectView) -> SiteResult<String> {
        match self.layouts.get(name) {
            Some(Layout::Compiled(template)) => template.render(context).map_err(SiteError::template),
            Some(Layout::Invalid(reason)) => {
                debug!("Layout {} is unusable: {}", name, reason);
                Err(SiteError::LayoutNotFound(name.to_string()))
            }
            None => Err(SiteError::LayoutNotFound(name.to_string())),
        }
    }

    fn compile_layout(&self, name: &str, source: &str) -> Layout {
        match self.parser.parse(source) {
            Ok(template) => Layout::Compiled(template),
            Err(e) => {
                warn!("Failed to compile layout {}: {}", name, e);
                Layout::Invalid(e.to_string())
            }
        }
    }

    fn rebuild(&mut self) -> SiteResult<()> {
        let parser = build_parser(&self.partials, &self.helpers, &self.markdown_config)
            .map_err(|e| {
                warn!("Failed to rebuild template parser: {}", e);
                e
            })?;
        self.parser = parser;

        let sources: Vec<(String, String)> = self
            .layout_sources
            .iter()
            .map(|(name, source)| (name.clone(), source.clone()))
            .collect();
        for (name, source) in sources {
            let layout = self.compile_layout(&name, &source);
            self.layouts.insert(name, layout);
        }

        Ok(())
    }
}

fn build_parser(
    partials: &BTreeMap<String, String>,
    helpers: &BTreeMap<String, Arc<dyn Helper>>,
    markdown: &MarkdownConfig,
) -> SiteResult<Parser> {
    let mut store = Partials::empty();
    for (name, source) in partials {
        store.add(name.clone(), source.clone());
    }

    let parser_builder = ParserBuilder::with_stdlib().partials(store);
    register_filters(parser_builder, markdown, helpers)
        .build()
        .map_err(SiteError::template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::helpers::FnHelper;
    use liquid::model::Value;
    use liquid::Object;

    fn renderer() -> Renderer {
        Renderer::new(&MarkdownConfig::default()).unwrap()
    }

    fn context(pairs: &[(&str, &str)]) -> Object {
        let mut obj = Object::new();
        for (k, v) in pairs {
            obj.insert(k.to_string().into(), Value::scalar(v.to_string()));
        }
        obj
    }

    #[test]
    fn test_layout_not_found_until_registered() {
        let mut r = renderer();
        let ctx = context(&[("title", "Hi"), ("content", "<p>x</p>")]);

        let err = r.render_layout("base", &ctx).unwrap_err();
        assert!(matches!(err, SiteError::LayoutNotFound(ref n) if n == "base"));

        r.register_layout("base", "<html>{{title}}:{{content}}</html>");
        assert_eq!(r.render_layout("base", &ctx).unwrap(), "<html>Hi:<p>x</p></html>");
    }

    #[test]
    fn test_invalid_layout_reports_not_found() {
        let mut r = renderer();
        r.register_layout("broken", "{% if %}");

        let err = r.render_layout("broken", &Object::new()).unwrap_err();
        assert!(matches!(err, SiteError::LayoutNotFound(_)));
    }

    #[test]
    fn test_later_registration_wins() {
        let mut r = renderer();
        r.register_layout("base", "one");
        r.register_layout("base", "two");
        assert_eq!(r.render_layout("base", &Object::new()).unwrap(), "two");
    }

    #[test]
    fn test_invalid_registration_replaces_valid_layout() {
        let mut r = renderer();
        r.register_layout("base", "ok");
        assert_eq!(r.render_layout("base", &Object::new()).unwrap(), "ok");

        r.register_layout("base", "{% for %}");
        let err = r.render_layout("base", &Object::new()).unwrap_err();
        assert!(matches!(err, SiteError::LayoutNotFound(ref n) if n == "base"));
    }

    #[test]
    fn test_partial_registered_after_layout() {
        let mut r = renderer();
        r.register_layout("base", "{% include \"header\" %}|{{content}}");
        r.register_partial("header", "<header>{{title}}</header>");

        let ctx = context(&[("title", "Site"), ("content", "body")]);
        assert_eq!(r.render_layout("base", &ctx).unwrap(), "<header>Site</header>|body");
    }

    #[test]
    fn test_missing_partial_is_render_error() {
        let r = renderer();
        let err = r
            .render_body("{% include \"nope\" %}", ContentFormat::Template, &Object::new())
            .unwrap_err();
        assert!(matches!(err, SiteError::Template(_)));
    }

    #[test]
    fn test_helper_as_filter_with_args() {
        let mut r = renderer();
        r.register_helper(
            "wrap",
            Arc::new(FnHelper::new(|input: &str, args: &[String]| {
                format!("{}{}{}", args[0], input, args[1])
            })),
        );

        let ctx = context(&[("title", "Hi")]);
        let out = r
            .render_body("{{ title | wrap: \"<\", \">\" }}", ContentFormat::Template, &ctx)
            .unwrap();
        assert_eq!(out, "<Hi>");
    }

    #[test]
    fn test_markdown_body_is_expanded_then_rendered() {
        let r = renderer();
        let ctx = context(&[("name", "World")]);
        let out = r
            .render_body("# Hello {{ name }}", ContentFormat::Markdown, &ctx)
            .unwrap();
        assert_eq!(out, "<h1 id=\"hello-world\">Hello World</h1>\n");
    }

    #[test]
    fn test_html_body_is_passthrough() {
        let r = renderer();
        let src = "<p>{{ not_expanded }}</p>";
        assert_eq!(r.render_body(src, ContentFormat::Passthrough, &Object::new()).unwrap(), src);
    }

    #[test]
    fn test_undefined_variable_is_error() {
        let r = renderer();
        assert!(r
            .render_body("{{ missing }}", ContentFormat::Template, &Object::new())
            .is_err());
    }

    #[test]
    fn test_markdownify_filter() {
        let r = renderer();
        let ctx = context(&[("summary", "*hi*")]);
        let out = r
            .render_body("{{ summary | markdownify }}", ContentFormat::Template, &ctx)
            .unwrap();
        assert_eq!(out, "<p><em>hi</em></p>\n");
    }
}
