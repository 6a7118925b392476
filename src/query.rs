use crate::models::Entry;

/// Tag filters offered on the articles page. `All` disables tag filtering.
pub const ARTICLE_FILTERS: [&str; 6] = [
    "All",
    "On Page SEO",
    "Technical SEO",
    "Semantic SEO",
    "AI",
    "Research",
];

pub const ALL_FILTER: &str = ARTICLE_FILTERS[0];

pub fn published(entries: Vec<Entry>) -> Vec<Entry> {
    entries.into_iter().filter(|e| e.published).collect()
}

/// Newest published entries by creation time.
pub fn latest(entries: Vec<Entry>, limit: usize) -> Vec<Entry> {
    let mut entries = published(entries);
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    entries.truncate(limit);
    entries
}

/// Published entries matching a free-text search and a tag filter.
///
/// The search matches case-insensitively against the title and every tag.
/// The tag filter matches exactly unless it is blank or [`ALL_FILTER`].
pub fn filter_articles(entries: Vec<Entry>, search: &str, tag: Option<&str>) -> Vec<Entry> {
    let needle = search.trim().to_lowercase();
    let tag = tag.filter(|t| !t.is_empty() && *t != ALL_FILTER);

    published(entries)
        .into_iter()
        .filter(|e| {
            needle.is_empty()
                || e.title.to_lowercase().contains(&needle)
                || e.tags.iter().any(|t| t.to_lowercase().contains(&needle))
        })
        .filter(|e| tag.map_or(true, |t| e.has_tag(t)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::bootstrap_entries;
    use chrono::Utc;

    fn ids(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn drafts_are_hidden() {
        let mut entries = bootstrap_entries(Utc::now());
        entries[0].published = false;
        let visible = published(entries);
        assert_eq!(visible.len(), 5);
        assert!(visible.iter().all(|e| e.id != "1"));
    }

    #[test]
    fn latest_sorts_by_creation_time_descending() {
        let entries = bootstrap_entries(Utc::now());
        let top = latest(entries, 3);
        assert_eq!(ids(&top), vec!["3", "6", "5"]);
    }

    #[test]
    fn search_matches_title_or_tag_case_insensitively() {
        let entries = bootstrap_entries(Utc::now());
        assert_eq!(ids(&filter_articles(entries.clone(), "react", None)), vec!["2"]);
        assert_eq!(
            ids(&filter_articles(entries, "semantic seo", None)),
            vec!["1", "5"]
        );
    }

    #[test]
    fn tag_filter_is_exact_and_all_disables_it() {
        let entries = bootstrap_entries(Utc::now());
        assert_eq!(
            ids(&filter_articles(entries.clone(), "", Some("AI"))),
            vec!["4", "6"]
        );
        assert_eq!(filter_articles(entries.clone(), "", Some("All")).len(), 6);
        assert_eq!(filter_articles(entries.clone(), "", Some("")).len(), 6);
        assert!(filter_articles(entries, "", Some("ai")).is_empty());
    }

    #[test]
    fn search_and_tag_combine() {
        let entries = bootstrap_entries(Utc::now());
        assert_eq!(
            ids(&filter_articles(entries.clone(), "agents", Some("AI"))),
            vec!["4"]
        );
        // "search" also hits the "Research" tag of entry 6
        assert_eq!(
            ids(&filter_articles(entries, "search", Some("AI"))),
            vec!["4", "6"]
        );
    }
}
