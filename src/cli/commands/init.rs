use log::info;
use std::path::Path;

use crate::utils::error::BoxResult;
use crate::utils::fs;

const SCAFFOLD: &[(&str, &str)] = &[
    (
        "defaults.yml",
        "layout: base\nsite_title: My foldsite\ntitle: Untitled\n",
    ),
    (
        "content/index.md",
        concat!(
            "---\ntitle: Welcome\n---\n# {{ title | shout }}\n\nPages in this folder:\n\n",
            "{% comment %}Copied files have no metadata, so guard lookups on it with if or unless.{% endcomment %}\n",
            "{% for page in folder.pages %}{% unless page.copied %}",
            "- [{% if page.metadata.title %}{{ page.metadata.title }}{% else %}{{ page.name }}{% endif %}]({{ page.path }})\n",
            "{% endunless %}{% endfor %}",
        ),
    ),
    (
        "content/about/index.md",
        "---\ntitle: About\n---\n# About\n\nEdit `content/about/index.md` to change this page.\n",
    ),
    (
        "layouts/base.html",
        "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"utf-8\">\n  <title>{{ title }} | {{ site_title }}</title>\n  <link rel=\"stylesheet\" href=\"/static/style.css\">\n</head>\n<body>\n{% include \"header\" %}\n<main>\n{{ content }}\n</main>\n</body>\n</html>\n",
    ),
    (
        "partials/header.html",
        "<header><a href=\"/\">{{ site_title }}</a>{% for f in site.subfolders %} <a href=\"{{ f.path }}/index.html\">{{ f.name }}</a>{% endfor %}</header>",
    ),
    ("content/robots.txt", "User-agent: *\nAllow: /\n"),
    ("helpers/shout.liquid", "{{ input | upcase }}!\n"),
    (
        "static/style.css",
        "body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }\n",
    ),
];

/// Handle the init command
pub fn handle_init_command(destination: &Path) -> BoxResult<()> {
    if destination.exists() {
        let is_empty = destination.read_dir()?.next().is_none();
        if !is_empty {
            return Err(format!("Directory '{}' exists and is not empty", destination.display()).into());
        }
    }

    info!("Creating new site at {}", destination.display());
    for (rel, contents) in SCAFFOLD {
        let path = destination.join(rel);
        fs::write_file(&path, contents)?;
        info!("Created {}", path.display());
    }

    info!("Run 'foldsite build {}' to build it", destination.display());
    Ok(())
}
