mod helper_filter;
mod markdownify;

use std::collections::BTreeMap;
use std::sync::Arc;
use liquid::partials::PartialCompiler;
use liquid::ParserBuilder;

use crate::config::MarkdownConfig;
use crate::template::helpers::Helper;

/// Register the built-in filters and one filter per site helper
pub fn register_filters<P: PartialCompiler>(
    parser_builder: ParserBuilder<P>,
    markdown: &MarkdownConfig,
    helpers: &BTreeMap<String, Arc<dyn Helper>>,
) -> ParserBuilder<P> {
    let mut parser_builder = parser_builder
        .filter(markdownify::MarkdownifyFilterParser { config: markdown.clone() });

    // Helpers registered later shadow built-ins of the same name
    for (name, helper) in helpers {
        parser_builder = parser_builder
            .filter(helper_filter::HelperFilterParser::new(name, Arc::clone(helper)));
    }

    parser_builder
}
