use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

lazy_static! {
    static ref CODE_BLOCK_REGEX: Regex =
        Regex::new(r#"<pre><code(?: class="language-([^"]+)")?>([^<]*)</code></pre>"#).unwrap();
}

/// Component for syntax highlighting code blocks in HTML
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
}

impl SyntaxHighlighter {
    /// Create a new syntax highlighter with the bundled syntaxes
    pub fn new() -> Self {
        SyntaxHighlighter {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Highlight every `<pre><code>` block of rendered Markdown.
    ///
    /// Blocks that cannot be highlighted are left exactly as they were.
    pub fn highlight_html(&self, html: &str) -> String {
        CODE_BLOCK_REGEX
            .replace_all(html, |caps: &regex::Captures| {
                let code = html_escape::decode_html_entities(&caps[2]).to_string();
                let lang = caps.get(1).map(|m| m.as_str());

                self.highlight_code(&code, lang)
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .to_string()
    }

    /// Highlight a code block.
    ///
    /// The named language is tried first, then a syntax detected from the
    /// first line. Returns `None` when neither produces output.
    pub fn highlight_code(&self, code: &str, lang: Option<&str>) -> Option<String> {
        let named = lang.and_then(|l| self.syntax_set.find_syntax_by_token(l));
        let detected = self.detect_syntax(code);

        for syntax in [named, detected].into_iter().flatten() {
            match self.render_classed(code, syntax) {
                Ok(highlighted) => {
                    let class = lang.unwrap_or(syntax.name.as_str()).to_lowercase();
                    return Some(format!(
                        "<div class=\"highlight\"><pre class=\"highlight {}\"><code>{}</code></pre></div>",
                        html_escape::encode_double_quoted_attribute(&class),
                        highlighted
                    ));
                }
                Err(e) => warn!("Highlighting as {} failed: {}", syntax.name, e),
            }
        }

        debug!("No syntax found for code block (lang: {:?})", lang);
        None
    }

    fn detect_syntax(&self, code: &str) -> Option<&SyntaxReference> {
        let first_line = code.lines().next()?;
        self.syntax_set.find_syntax_by_first_line(first_line)
    }

    fn render_classed(&self, code: &str, syntax: &SyntaxReference) -> Result<String, syntect::Error> {
        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, ClassStyle::Spaced);

        for line in LinesWithEndings::from(code) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }

        Ok(generator.finalize())
    }
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
