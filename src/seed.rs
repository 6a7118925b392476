use chrono::{DateTime, Duration, Utc};

use crate::models::{Entry, EntryKind};

struct SeedEntry {
    id: &'static str,
    title: &'static str,
    slug: &'static str,
    excerpt: &'static str,
    content: &'static str,
    tags: &'static [&'static str],
    kind: EntryKind,
    age_ms: i64,
    read_time: u32,
}

const SEED: [SeedEntry; 6] = [
    SeedEntry {
        id: "1",
        title: "The Future of Semantic Search",
        slug: "future-semantic-search",
        excerpt: "Exploring how LLMs and Knowledge Graphs are reshaping the SEO landscape forever.",
        content: "# The Future of Semantic Search\n\n\
                  Search engines are evolving from keyword matching to entity understanding. \
                  This shift requires a holistic approach to SEO.\n\n\
                  ## Entity-Based SEO\n\n\
                  Entities are the backbone of the semantic web. By connecting concepts, we create \
                  a knowledge graph that search engines can understand.\n\n\
                  ### Key Takeaways\n\n\
                  1. Focus on topics, not just keywords.\n\
                  2. Build topical authority.\n\
                  3. Structure data effectively.",
        tags: &["Technical SEO", "Research", "Semantic SEO"],
        kind: EntryKind::Research,
        age_ms: 100_000_000,
        read_time: 5,
    },
    SeedEntry {
        id: "2",
        title: "Optimizing React for Core Web Vitals",
        slug: "optimizing-react-cwv",
        excerpt: "A deep dive into server components and rendering patterns to boost your On Page metrics.",
        content: "# Building High Performance React Apps\n\n\
                  Performance is not just about speed; it's about user experience. \
                  In this guide, we explore advanced patterns.\n\n\
                  ## The Cost of Re-renders\n\n\
                  React is fast, but unnecessary re-renders can kill your TBT (Total Blocking Time).",
        tags: &["On Page SEO", "Technical SEO"],
        kind: EntryKind::Blog,
        age_ms: 50_000_000,
        read_time: 8,
    },
    SeedEntry {
        id: "3",
        title: "Holistic Branding Strategy",
        slug: "holistic-branding",
        excerpt: "Aligning your technical infrastructure with your brand voice for maximum impact.",
        content: "Full content about holistic branding...",
        tags: &["Research", "On Page SEO"],
        kind: EntryKind::Blog,
        age_ms: 0,
        read_time: 3,
    },
    SeedEntry {
        id: "4",
        title: "AI Agents in Search",
        slug: "ai-agents-search",
        excerpt: "How autonomous AI agents are becoming the new users of your website.",
        content: "Content about AI agents...",
        tags: &["AI", "Research", "Technical SEO"],
        kind: EntryKind::Research,
        age_ms: 20_000_000,
        read_time: 6,
    },
    SeedEntry {
        id: "5",
        title: "Mastering Internal Linking Structures",
        slug: "internal-linking-mastery",
        excerpt: "Designing site architecture that flows page rank efficiently to money pages.",
        content: "Content about internal linking...",
        tags: &["On Page SEO", "Semantic SEO"],
        kind: EntryKind::Blog,
        age_ms: 15_000_000,
        read_time: 4,
    },
    SeedEntry {
        id: "6",
        title: "The End of Ten Blue Links",
        slug: "end-of-ten-blue-links",
        excerpt: "Preparing for a zero-click future with Generative AI experiences.",
        content: "Content about SGE...",
        tags: &["AI", "Research"],
        kind: EntryKind::Blog,
        age_ms: 5_000_000,
        read_time: 5,
    },
];

/// The collection written to an empty store so the site is never blank on first run.
pub fn bootstrap_entries(now: DateTime<Utc>) -> Vec<Entry> {
    SEED.iter()
        .map(|seed| Entry {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            slug: seed.slug.to_string(),
            excerpt: seed.excerpt.to_string(),
            content: seed.content.to_string(),
            cover_image: None,
            tags: seed.tags.iter().map(|t| t.to_string()).collect(),
            kind: seed.kind,
            published: true,
            created_at: now - Duration::milliseconds(seed.age_ms),
            updated_at: now,
            read_time: seed.read_time,
        })
        .collect()
}
