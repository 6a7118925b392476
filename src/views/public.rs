use maud::{html, Markup, PreEscaped};
use serde_json::json;

use crate::config::SiteConfig;
use crate::models::{ContactInput, Entry};
use crate::query::{ALL_FILTER, ARTICLE_FILTERS};
use crate::utils::convert_markup_to_html;
use crate::views::layout::{page, Seo};

const AUTHOR: &str = "Shubhojit";
const TAGLINE: &str = "Building the bridge between Semantic Search, Knowledge Graphs, and High-Performance Web Architecture.";

const COMPETENCIES: [(&str, &str); 3] = [
    (
        "On Page SEO",
        "Crafting content architecture and UX that users love and bots understand.",
    ),
    (
        "Technical SEO",
        "Server-side rendering, crawl budget optimization, and web performance.",
    ),
    (
        "Semantic SEO",
        "Optimizing for entities, knowledge graphs, and topical authority.",
    ),
];

const EXPERTISE: [(&str, [&str; 4]); 3] = [
    (
        "Technical SEO",
        [
            "Log File Analysis",
            "JavaScript Rendering (SSR/ISR)",
            "Core Web Vitals Optimization",
            "Crawl Budget Management",
        ],
    ),
    (
        "Semantic SEO",
        [
            "Knowledge Graph Construction",
            "Schema Markup Strategy",
            "Entity Salience Optimization",
            "NLP & LLM Integration",
        ],
    ),
    (
        "On Page SEO",
        [
            "Internal Linking Architecture",
            "Content Clustering",
            "UX/UI Signals",
            "Keyword to Entity Mapping",
        ],
    ),
];

pub fn article_href(entry: &Entry) -> String {
    format!("/articles/{}", urlencoding::encode(&entry.slug))
}

fn articles_href(search: &str, tag: &str) -> String {
    let mut href = format!("/articles?tag={}", urlencoding::encode(tag));
    if !search.is_empty() {
        href.push_str("&q=");
        href.push_str(&urlencoding::encode(search));
    }
    href
}

fn entry_card(entry: &Entry, tag_limit: usize) -> Markup {
    html! {
        a href=(article_href(entry)) style="color: inherit; text-decoration: none;" {
            div class="card" {
                div {
                    @for tag in entry.tags.iter().take(tag_limit) {
                        span class="badge" { (tag) }
                    }
                }
                h3 { (entry.title) }
                p { (entry.excerpt) }
                p class="meta" {
                    (entry.created_at.format("%b %d, %Y"))
                    " · " (entry.read_time) " min read"
                }
            }
        }
    }
}

pub fn create_home_page(config: &SiteConfig, latest: &[Entry]) -> Markup {
    let schema = json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": AUTHOR,
        "url": config.site_url,
        "jobTitle": "SEO Engineer",
        "knowsAbout": ["SEO", "Semantic Search", "Web Performance", "Next.js"],
        "description": TAGLINE,
    });
    let seo = Seo::website(
        format!("{} | Future of Search & Web Performance", config.site_name),
        "Personal portfolio of a Holistic SEO Engineer specializing in Semantic Search, Technical SEO, and High-Performance Web Architecture.",
        "/",
    )
    .with_schema(schema);

    page(
        config,
        &seo,
        html! {
            section {
                h1 { "Holistic " br; "SEO Engineer" }
                p { (TAGLINE) }
                p {
                    a class="pill" href="/about" { "About Me" }
                    a class="pill" href="/articles" { "Read Articles" }
                }
            }
            section {
                h2 { "Core Competencies" }
                p class="meta" { "A multi-disciplinary approach to digital dominance." }
                div class="grid" {
                    @for (title, desc) in COMPETENCIES {
                        div class="card" {
                            h3 { (title) }
                            p { (desc) }
                        }
                    }
                }
            }
            section {
                h2 { "Latest Articles" }
                p class="meta" { "Thoughts on the industry evolution." }
                div class="grid" {
                    @for entry in latest {
                        (entry_card(entry, 2))
                    }
                }
                p { a class="pill" href="/articles" { "Explore Knowledge Base" } }
            }
        },
    )
}

pub fn create_articles_page(
    config: &SiteConfig,
    entries: &[Entry],
    search: &str,
    active_tag: &str,
) -> Markup {
    let seo = Seo::website(
        format!("Articles | {}", config.site_name),
        "In-depth analysis, case studies, and guides on SEO and Web Engineering.",
        "/articles",
    );

    page(
        config,
        &seo,
        html! {
            h1 { "Knowledge Base" }
            p { "Exploring the intersection of search engines and modern web architecture." }
            form method="get" action="/articles" {
                input type="hidden" name="tag" value=(active_tag);
                input type="search" name="q" value=(search) placeholder="Search articles...";
            }
            p {
                @for filter in ARTICLE_FILTERS {
                    a class=(if filter == active_tag { "pill active" } else { "pill" })
                        href=(articles_href(search, filter)) { (filter) }
                }
            }
            @if entries.is_empty() {
                div class="card" {
                    h3 { "No Articles Found" }
                    p { "Try adjusting your filters or search terms." }
                }
            } @else {
                div class="grid" {
                    @for entry in entries {
                        (entry_card(entry, 3))
                    }
                }
            }
        },
    )
}

pub fn create_article_page(config: &SiteConfig, entry: &Entry) -> Markup {
    let schema = json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": entry.title,
        "description": entry.excerpt,
        "datePublished": entry.created_at,
        "dateModified": entry.updated_at,
        "author": { "@type": "Person", "name": AUTHOR },
    });
    let mut seo = Seo::website(
        format!("{} | {}", entry.title, config.site_name),
        entry.excerpt.clone(),
        &article_href(entry),
    )
    .with_schema(schema);
    seo.kind = "article";
    seo.image = entry.cover_image.clone();

    page(
        config,
        &seo,
        html! {
            article {
                div {
                    @for tag in &entry.tags {
                        span class="badge" { (tag) }
                    }
                }
                h1 { (entry.title) }
                p class="meta" {
                    (AUTHOR) " · " (entry.created_at.format("%B %d, %Y"))
                    " · " (entry.read_time) " min read"
                }
                @if let Some(cover) = &entry.cover_image {
                    img src=(cover) alt=(entry.title) style="max-width: 100%;";
                }
                div class="prose" {
                    (PreEscaped(convert_markup_to_html(&entry.content)))
                }
                p { a class="pill" href="/articles" { "← Back to Articles" } }
            }
        },
    )
}

pub fn create_about_page(config: &SiteConfig) -> Markup {
    let seo = Seo::website(
        format!("About Me | {}", config.site_name),
        "Holistic SEO Engineer specializing in technical search and semantic web.",
        "/about",
    );

    page(
        config,
        &seo,
        html! {
            h1 { "Hello, I'm " (AUTHOR) "." }
            p { "I am a Holistic SEO Engineer obsessed with the mechanics of search and the architecture of the web." }
            p {
                "My work sits at the intersection of Marketing and Engineering. I don't just optimize content; "
                "I build infrastructure that search engines love to crawl. My philosophy is simple: "
                strong { "Technical Excellence + Semantic Understanding = Organic Dominance." }
            }
            p { a class="pill" href="/contact" { "Let's Chat" } }
            h2 { "My Expertise" }
            div class="grid" {
                @for (area, skills) in EXPERTISE {
                    div class="card" {
                        h3 { (area) }
                        ul {
                            @for skill in skills {
                                li { (skill) }
                            }
                        }
                    }
                }
            }
        },
    )
}

/// What the contact page shows: the form (optionally with an error) or the confirmation.
pub enum ContactView<'a> {
    Form {
        input: &'a ContactInput,
        error: Option<String>,
    },
    Sent,
}

pub fn create_contact_page(config: &SiteConfig, view: ContactView<'_>) -> Markup {
    let seo = Seo::website(
        format!("Contact | {}", config.site_name),
        format!("Get in touch with {AUTHOR} for SEO consulting and engineering."),
        "/contact",
    );

    page(
        config,
        &seo,
        html! {
            h1 { "Let's Chat" }
            p { "Have a project in mind? Want to discuss the future of search? I'm always open to interesting conversations." }
            div class="card" {
                p { strong { "Email Me" } br; "hello@shubhojit.io" }
                p { strong { "Location" } br; "Remote / Worldwide" }
            }
            div class="card" {
                @match view {
                    ContactView::Sent => {
                        h3 { "Message Sent!" }
                        p { "I'll get back to you as soon as possible." }
                        a class="pill" href="/contact" { "Send Another" }
                    }
                    ContactView::Form { input, error } => {
                        form method="post" action="/contact" {
                            @if let Some(error) = error {
                                p class="error" { (error) }
                            }
                            label for="name" { "Your Name" }
                            input id="name" name="name" type="text" required value=(input.name) placeholder="John Doe";
                            label for="email" { "Email Address" }
                            input id="email" name="email" type="email" required value=(input.email) placeholder="john@example.com";
                            label for="message" { "Message" }
                            textarea id="message" name="message" required placeholder="Tell me about your project..." { (input.message) }
                            p { button type="submit" { "Send Message" } }
                        }
                    }
                }
            }
        },
    )
}

/// Active filter pill for a raw `tag` query value.
pub fn active_filter(tag: Option<&str>) -> &str {
    match tag {
        Some(t) if !t.is_empty() => t,
        _ => ALL_FILTER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::bootstrap_entries;
    use chrono::Utc;

    #[test]
    fn article_page_renders_markup_and_blog_posting_schema() {
        let config = SiteConfig::default();
        let entry = &bootstrap_entries(Utc::now())[0];
        let html = create_article_page(&config, entry).into_string();

        assert!(html.contains("<h2>Entity-Based SEO</h2>"));
        assert!(html.contains(r#""@type":"BlogPosting""#));
        assert!(html.contains(r#"<meta property="og:type" content="article">"#));
        assert!(html.contains("http://localhost:8081/articles/future-semantic-search"));
    }

    #[test]
    fn articles_page_marks_the_active_filter() {
        let config = SiteConfig::default();
        let html = create_articles_page(&config, &[], "", "AI").into_string();

        assert!(html.contains(r#"class="pill active" href="/articles?tag=AI""#));
        assert!(html.contains("No Articles Found"));
    }

    #[test]
    fn filter_links_keep_the_search() {
        assert_eq!(
            articles_href("core web", "On Page SEO"),
            "/articles?tag=On%20Page%20SEO&q=core%20web"
        );
    }

    #[test]
    fn blank_tag_means_all() {
        assert_eq!(active_filter(None), "All");
        assert_eq!(active_filter(Some("")), "All");
        assert_eq!(active_filter(Some("AI")), "AI");
    }
}
