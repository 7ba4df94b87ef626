use comrak::Options;

use crate::config::MarkdownConfig;

/// Create ComrakOptions with GitHub Flavored Markdown settings
pub fn create_comrak_options<'a>(config: &MarkdownConfig) -> Options<'a> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;

    // Heading ids are added after rendering, on the heading element itself
    options.extension.header_ids = None;

    // Render options
    options.render.hardbreaks = false;
    options.render.github_pre_lang = false;
    options.render.unsafe_ = true; // Raw HTML in content is passed through

    options.parse.smart = config.smart_punctuation;

    options
}

/// Render markdown to HTML using Comrak
pub fn render_markdown<'a>(content: &str, options: &Options<'a>) -> String {
    comrak::markdown_to_html(content, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comrak_rendering() {
        let options = create_comrak_options(&MarkdownConfig::default());
        let markdown = "# Hello, World!\n\nThis is a **bold** statement.";
        let html = render_markdown(markdown, &options);

        assert!(html.contains("<h1>Hello, World!</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_fenced_code_gets_language_class() {
        let options = create_comrak_options(&MarkdownConfig::default());
        let html = render_markdown("```rust\nfn main() {}\n```", &options);

        assert!(html.contains("<pre><code class=\"language-rust\">"));
    }

    #[test]
    fn test_raw_html_passes_through() {
        let options = create_comrak_options(&MarkdownConfig::default());
        let html = render_markdown("<div class=\"note\">hi</div>", &options);

        assert!(html.contains("<div class=\"note\">hi</div>"));
    }
}
