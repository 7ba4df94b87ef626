use std::fmt;
use liquid_core::{Runtime, ValueView, Value, Result as LiquidResult};
use liquid_core::parser::{FilterArguments, ParseFilter, ParameterReflection};
use liquid_core::FilterReflection;

use crate::config::MarkdownConfig;
use crate::markdown::engine::{create_comrak_options, render_markdown};

/// Renders a metadata string as Markdown, e.g. `{{ summary | markdownify }}`.
///
/// Uses the site's comrak options but no heading ids or highlighting.
#[derive(Debug, Clone)]
pub struct MarkdownifyFilter {
    config: MarkdownConfig,
}

impl liquid_core::Filter for MarkdownifyFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> LiquidResult<Value> {
        let markdown = input.to_kstr().to_string();
        let html = render_markdown(&markdown, &create_comrak_options(&self.config));
        Ok(Value::scalar(html))
    }
}

impl fmt::Display for MarkdownifyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "markdownify")
    }
}

/// Parse filter factory for markdownify
#[derive(Debug, Clone)]
pub struct MarkdownifyFilterParser {
    pub config: MarkdownConfig,
}

impl FilterReflection for MarkdownifyFilterParser {
    fn name(&self) -> &str {
        "markdownify"
    }

    fn description(&self) -> &str {
        "Converts markdown text to HTML"
    }

    fn positional_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }

    fn keyword_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }
}

impl ParseFilter for MarkdownifyFilterParser {
    fn parse(&self, _args: FilterArguments) -> LiquidResult<Box<dyn liquid_core::Filter>> {
        Ok(Box::new(MarkdownifyFilter { config: self.config.clone() }))
    }

    fn reflection(&self) -> &dyn FilterReflection {
        self
    }
}
