use pulldown_cmark::{html::push_html, CowStr, Event, HeadingLevel, Tag};
use uuid::Uuid;

/// Derives a URL slug from a title: lowercase, whitespace runs become a single
/// hyphen, anything outside `[a-z0-9-]` is dropped.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_whitespace = false;
    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            slug.push(c);
        }
    }
    slug
}

pub fn generate_entry_id() -> String {
    Uuid::new_v4().to_string()
}

/// Renders the editor's line-based markup.
///
/// `# `, `## ` and `### ` open a heading, an empty line is a line break and
/// every other line is its own paragraph. Text is escaped by the HTML writer.
pub fn convert_markup_to_html(content: &str) -> String {
    let events = content.split('\n').flat_map(|raw| {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        line_events(line)
    });

    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

fn line_events(line: &str) -> Vec<Event<'_>> {
    if line.is_empty() {
        return vec![Event::HardBreak];
    }

    let (tag, text) = match heading(line) {
        Some((level, text)) => (Tag::Heading(level, None, Vec::new()), text),
        None => (Tag::Paragraph, line),
    };

    vec![
        Event::Start(tag.clone()),
        Event::Text(CowStr::Borrowed(text)),
        Event::End(tag),
    ]
}

fn heading(line: &str) -> Option<(HeadingLevel, &str)> {
    if let Some(text) = line.strip_prefix("# ") {
        Some((HeadingLevel::H1, text))
    } else if let Some(text) = line.strip_prefix("## ") {
        Some((HeadingLevel::H2, text))
    } else {
        line.strip_prefix("### ").map(|text| (HeadingLevel::H3, text))
    }
}
