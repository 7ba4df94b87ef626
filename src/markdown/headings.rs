use std::collections::HashSet;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HEADING_REGEX: Regex = Regex::new(r"<h([1-6])>(.*?)</h[1-6]>").unwrap();
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]+>").unwrap();
}

/// Give every bare `<hN>` element a slug id derived from its text.
///
/// Repeated slugs within one document get the first free `-1`, `-2`, ...
/// suffix, so no two headings share an id.
pub fn add_heading_ids(html: &str) -> String {
    let mut used: HashSet<String> = HashSet::new();

    HEADING_REGEX
        .replace_all(html, |caps: &regex::Captures| {
            let level = &caps[1];
            let inner = &caps[2];

            let base = heading_slug(inner);
            let mut id = base.clone();
            let mut suffix = 1;
            while used.contains(&id) {
                id = format!("{}-{}", base, suffix);
                suffix += 1;
            }
            used.insert(id.clone());

            format!("<h{level} id=\"{id}\">{inner}</h{level}>")
        })
        .to_string()
}

fn heading_slug(inner_html: &str) -> String {
    let text = TAG_REGEX.replace_all(inner_html, "");
    let text = html_escape::decode_html_entities(&text);
    let slug = slug::slugify(text);

    if slug.is_empty() {
        "section".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_gets_id() {
        assert_eq!(add_heading_ids("<h1>Hello</h1>\n"), "<h1 id=\"hello\">Hello</h1>\n");
    }

    #[test]
    fn test_inline_markup_is_stripped_from_slug() {
        let html = add_heading_ids("<h2>Using <code>foo</code> &amp; bar</h2>");
        assert_eq!(html, "<h2 id=\"using-foo-bar\">Using <code>foo</code> &amp; bar</h2>");
    }

    #[test]
    fn test_duplicate_headings_are_numbered() {
        let html = add_heading_ids("<h2>Setup</h2><h3>Setup</h3><h2>Setup</h2>");
        assert!(html.contains("<h2 id=\"setup\">"));
        assert!(html.contains("<h3 id=\"setup-1\">"));
        assert!(html.contains("<h2 id=\"setup-2\">"));
    }

    #[test]
    fn test_symbol_only_heading() {
        assert_eq!(add_heading_ids("<h3>!!!</h3>"), "<h3 id=\"section\">!!!</h3>");
    }

    #[test]
    fn test_suffix_never_reuses_an_existing_id() {
        let html = add_heading_ids("<h1>Setup</h1><h1>Setup</h1><h1>Setup 1</h1>");
        assert_eq!(
            html,
            "<h1 id=\"setup\">Setup</h1><h1 id=\"setup-1\">Setup</h1><h1 id=\"setup-1-1\">Setup 1</h1>"
        );

        let html = add_heading_ids("<h2>Setup 1</h2><h2>Setup</h2><h2>Setup</h2>");
        assert!(html.contains("<h2 id=\"setup-1\">Setup 1</h2>"));
        assert!(html.contains("<h2 id=\"setup\">Setup</h2>"));
        assert!(html.contains("<h2 id=\"setup-2\">Setup</h2>"));
    }
}
