use crate::config::MarkdownConfig;
use crate::markdown::engine::{create_comrak_options, render_markdown};
use crate::markdown::headings::add_heading_ids;
use crate::markdown::renderer::syntax::SyntaxHighlighter;

/// Markdown renderer with syntax highlighting and heading ids
pub struct MarkdownRenderer<'a> {
    options: comrak::Options<'a>,
    syntax_highlighter: Option<SyntaxHighlighter>,
    heading_ids: bool,
}

impl<'a> MarkdownRenderer<'a> {
    /// Create a new markdown renderer from config
    pub fn new(config: &MarkdownConfig) -> Self {
        let syntax_highlighter = if config.highlight {
            Some(SyntaxHighlighter::new())
        } else {
            None
        };

        MarkdownRenderer {
            options: create_comrak_options(config),
            syntax_highlighter,
            heading_ids: config.heading_ids,
        }
    }

    /// Render Markdown content to HTML. Never fails.
    pub fn render(&self, content: &str) -> String {
        let mut html = render_markdown(content, &self.options);

        if self.heading_ids {
            html = add_heading_ids(&html);
        }

        match &self.syntax_highlighter {
            Some(highlighter) => highlighter.highlight_html(&html),
            None => html,
        }
    }
}

impl Default for MarkdownRenderer<'_> {
    fn default() -> Self {
        Self::new(&MarkdownConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_rendering() {
        let renderer = MarkdownRenderer::default();
        let html = renderer.render("# Hello\n\nThis is a **bold** statement.");

        assert!(html.starts_with("<h1 id=\"hello\">Hello</h1>\n"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_syntax_highlighting() {
        let renderer = MarkdownRenderer::default();
        let html = renderer.render("```rust\nfn main() {\n    println!(\"Hello, World!\");\n}\n```");

        assert!(html.contains("<div class=\"highlight\">"));
        assert!(html.contains("<pre class=\"highlight rust\">"));
    }

    #[test]
    fn test_plain_options() {
        let config = MarkdownConfig {
            heading_ids: false,
            highlight: false,
            smart_punctuation: false,
        };
        let renderer = MarkdownRenderer::new(&config);
        let html = renderer.render("## Plain\n\n```rust\nlet x = 1;\n```");

        assert!(html.contains("<h2>Plain</h2>"));
        assert!(html.contains("<pre><code class=\"language-rust\">"));
    }
}
