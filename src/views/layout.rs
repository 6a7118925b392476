use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde_json::Value;

use crate::config::SiteConfig;

const STYLESHEET: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; line-height: 1.6; color: #18181b; background: #fafafa; }
.w { max-width: 72ch; margin: 0 auto; padding: 0 2ch; }
nav { display: flex; gap: 2ch; padding: 2ch 0; border-bottom: 1px solid #e4e4e7; }
nav a { color: inherit; text-decoration: none; }
.brand { font-weight: 700; margin-right: auto; }
.card { border: 1px solid #e4e4e7; border-radius: 8px; padding: 2ch; margin: 2ch 0; background: #fff; }
.grid { display: grid; gap: 2ch; grid-template-columns: repeat(auto-fill, minmax(28ch, 1fr)); }
.badge { display: inline-block; font-size: 0.75em; padding: 0 1ch; margin-right: 0.5ch; border-radius: 4px; background: #e0f2fe; color: #0369a1; }
.pill { display: inline-block; padding: 0.25ch 1.5ch; margin: 0 0.5ch 0.5ch 0; border-radius: 999px; border: 1px solid #d4d4d8; color: inherit; text-decoration: none; }
.pill.active { background: #06b6d4; border-color: #06b6d4; color: #000; }
.meta { font-family: monospace; font-size: 0.8em; color: #71717a; }
.error { color: #dc2626; }
label { display: block; font-size: 0.75em; text-transform: uppercase; color: #71717a; margin-top: 1.5ch; }
input, textarea, select { width: 100%; box-sizing: border-box; padding: 1ch; font: inherit; }
textarea.content { height: 40ch; font-family: monospace; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 1ch; border-bottom: 1px solid #e4e4e7; }
footer { margin-top: 6ch; padding: 2ch 0; border-top: 1px solid #e4e4e7; font-size: 0.85em; color: #71717a; }
"#;

/// Per-page metadata for the `<head>`: title, canonical link, Open Graph,
/// Twitter card and an optional schema.org JSON-LD block.
pub struct Seo {
    pub title: String,
    pub description: String,
    /// Site-relative path, joined onto the configured site URL.
    pub canonical: String,
    pub kind: &'static str,
    pub image: Option<String>,
    pub schema: Option<Value>,
}

impl Seo {
    pub fn website(title: impl Into<String>, description: impl Into<String>, path: &str) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            canonical: path.to_string(),
            kind: "website",
            image: None,
            schema: None,
        }
    }

    pub fn with_schema(mut self, schema: Value) -> Self {
        self.schema = Some(schema);
        self
    }
}

pub fn create_html_head(page_title: &str, extra: Markup) -> Markup {
    html! {
        head {
            title { (page_title) }
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            style { (PreEscaped(STYLESHEET)) }
            (extra)
        }
    }
}

fn seo_tags(seo: &Seo, config: &SiteConfig) -> Markup {
    let url = format!("{}{}", config.site_url, seo.canonical);
    let image = seo
        .image
        .clone()
        .unwrap_or_else(|| format!("{}/og-image.jpg", config.site_url));

    html! {
        meta name="description" content=(seo.description);
        link rel="canonical" href=(url);

        meta property="og:type" content=(seo.kind);
        meta property="og:title" content=(seo.title);
        meta property="og:description" content=(seo.description);
        meta property="og:site_name" content=(config.site_name);
        meta property="og:url" content=(url);
        meta property="og:image" content=(image);

        meta name="twitter:card" content="summary_large_image";
        meta name="twitter:title" content=(seo.title);
        meta name="twitter:description" content=(seo.description);
        meta name="twitter:image" content=(image);

        @if let Some(schema) = &seo.schema {
            script type="application/ld+json" { (PreEscaped(json_ld(schema))) }
        }
    }
}

/// Serializes a JSON-LD value so it cannot close its surrounding `<script>`.
fn json_ld(schema: &Value) -> String {
    schema.to_string().replace("</", "<\\/")
}

fn create_nav(brand: &str) -> Markup {
    html! {
        nav class="w" {
            a class="brand" href="/" { (brand) }
            a href="/articles" { "Articles" }
            a href="/about" { "About" }
            a href="/contact" { "Contact" }
        }
    }
}

fn create_page_footer(site_name: &str) -> Markup {
    html! {
        footer {
            div class="w" {
                p { (site_name) " :: search, semantics and web performance" }
                p { a href="/admin" { "admin" } }
            }
        }
    }
}

/// Full document for a page rendered with site configuration.
pub fn page(config: &SiteConfig, seo: &Seo, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (create_html_head(&seo.title, seo_tags(seo, config)))
            body {
                (create_nav(&config.site_name))
                main class="content w" aria-label="Content" {
                    (body)
                }
                (create_page_footer(&config.site_name))
            }
        }
    }
}

pub fn create_error_page(code: &str, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (create_html_head(code, html! {}))
            body {
                (create_nav("Home"))
                main class="content w" aria-label="Content" {
                    h1 { (code) }
                    p { (message) }
                    p { a href="/" { "Return to homepage" } }
                }
            }
        }
    }
}

pub fn create_404_page() -> Markup {
    create_error_page("404", "The page you're looking for doesn't exist.")
}
