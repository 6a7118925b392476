use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::utils::{generate_entry_id, slugify};

/// Legacy classification kept on every record. Listing pages filter by tag instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Blog,
    Research,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Blog => "blog",
            EntryKind::Research => "research",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blog" => Ok(EntryKind::Blog),
            "research" => Ok(EntryKind::Research),
            other => Err(ValidationError::UnknownKind(other.to_string())),
        }
    }
}

/// A blog post or research article, persisted as one element of the content collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub read_time: u32,
}

impl Entry {
    /// Blank entry as shown by the "new entry" editor, with a fresh id.
    pub fn draft() -> Self {
        let now = Utc::now();
        Self {
            id: generate_entry_id(),
            title: String::new(),
            slug: String::new(),
            excerpt: String::new(),
            content: String::new(),
            cover_image: None,
            tags: Vec::new(),
            kind: EntryKind::Blog,
            published: true,
            created_at: now,
            updated_at: now,
            read_time: 1,
        }
    }

    /// Adds `tag` unless it is blank or already present. Returns whether it was added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Editor form as posted by `/admin/save`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryForm {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    /// Comma-separated labels, in the order the editor typed them.
    #[serde(default)]
    pub tags: String,
    #[serde(default = "default_kind", rename = "type")]
    pub kind: String,
    pub published: Option<String>,
    #[serde(default)]
    pub read_time: String,
    #[serde(default)]
    pub cover_image: String,
}

fn default_kind() -> String {
    EntryKind::Blog.as_str().to_string()
}

impl EntryForm {
    /// Builds the full record to hand to the content store.
    ///
    /// `existing` is the stored entry with the same id, if any. A blank slug is
    /// derived from the title only when creating; existing entries keep their
    /// original `created_at`.
    pub fn into_entry(self, existing: Option<&Entry>) -> Result<Entry, ValidationError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id"));
        }

        let mut slug = self.slug.trim().to_string();
        if slug.is_empty() {
            if existing.is_some() {
                return Err(ValidationError::MissingField("slug"));
            }
            slug = slugify(&title);
        }

        if self.content.trim().is_empty() {
            return Err(ValidationError::MissingField("content"));
        }

        let read_time = match self.read_time.trim() {
            "" => 1,
            raw => raw
                .parse::<u32>()
                .map_err(|_| ValidationError::InvalidReadTime)?,
        };

        let kind = self.kind.parse::<EntryKind>()?;
        let now = Utc::now();
        let cover_image = Some(self.cover_image.trim().to_string()).filter(|c| !c.is_empty());

        let mut entry = Entry {
            id: self.id,
            title,
            slug,
            excerpt: self.excerpt.trim().to_string(),
            content: self.content,
            cover_image,
            tags: Vec::new(),
            kind,
            published: self.published.is_some(),
            created_at: existing.map_or(now, |e| e.created_at),
            updated_at: existing.map_or(now, |e| e.updated_at),
            read_time,
        };
        for tag in self.tags.split(',') {
            entry.add_tag(tag);
        }
        Ok(entry)
    }
}

impl From<&Entry> for EntryForm {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id.clone(),
            title: entry.title.clone(),
            slug: entry.slug.clone(),
            excerpt: entry.excerpt.clone(),
            content: entry.content.clone(),
            tags: entry.tags.join(", "),
            kind: entry.kind.as_str().to_string(),
            published: entry.published.then(|| "on".to_string()),
            read_time: entry.read_time.to_string(),
            cover_image: entry.cover_image.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ArticleParams {
    pub q: Option<String>,
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::MissingField("message"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn form(title: &str, slug: &str) -> EntryForm {
        EntryForm {
            id: "abc".into(),
            title: title.into(),
            slug: slug.into(),
            content: "# Heading\n\nBody".into(),
            kind: "blog".into(),
            published: Some("on".into()),
            ..Default::default()
        }
    }

    #[test]
    fn adding_a_tag_twice_keeps_one_copy() {
        let mut entry = Entry::draft();
        assert!(entry.add_tag("AI"));
        assert!(!entry.add_tag("AI"));
        assert_eq!(entry.tags, vec!["AI".to_string()]);
    }

    #[test]
    fn tags_keep_insertion_order() {
        let mut entry = Entry::draft();
        entry.add_tag("Research");
        entry.add_tag("AI");
        entry.add_tag("Research");
        entry.add_tag("Technical SEO");
        assert_eq!(entry.tags, vec!["Research", "AI", "Technical SEO"]);

        entry.remove_tag("AI");
        assert_eq!(entry.tags, vec!["Research", "Technical SEO"]);
    }

    #[test]
    fn blank_slug_is_derived_from_title_on_creation() {
        let entry = form("Hello World", "").into_entry(None).unwrap();
        assert_eq!(entry.slug, "hello-world");
    }

    #[test]
    fn blank_slug_is_rejected_when_editing() {
        let existing = form("Hello World", "").into_entry(None).unwrap();
        let err = form("Hello World", " ").into_entry(Some(&existing)).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("slug"));
    }

    #[test]
    fn missing_title_or_content_is_rejected() {
        assert_matches!(
            form("  ", "x").into_entry(None),
            Err(ValidationError::MissingField("title"))
        );

        let mut no_content = form("Title", "x");
        no_content.content = "\n".into();
        assert_matches!(
            no_content.into_entry(None),
            Err(ValidationError::MissingField("content"))
        );
    }

    #[test]
    fn form_tags_are_split_and_deduplicated() {
        let mut f = form("Tags", "");
        f.tags = "AI, Research,AI, ,Technical SEO".into();
        let entry = f.into_entry(None).unwrap();
        assert_eq!(entry.tags, vec!["AI", "Research", "Technical SEO"]);
    }

    #[test]
    fn read_time_must_be_numeric() {
        let mut f = form("Read", "");
        f.read_time = "five".into();
        assert_matches!(f.into_entry(None), Err(ValidationError::InvalidReadTime));

        let mut f = form("Read", "");
        f.read_time = "".into();
        assert_eq!(f.into_entry(None).unwrap().read_time, 1);
    }

    #[test]
    fn editing_keeps_original_creation_time() {
        let mut existing = form("Original", "").into_entry(None).unwrap();
        existing.created_at = existing.created_at - chrono::Duration::days(3);

        let updated = form("Renamed", "original").into_entry(Some(&existing)).unwrap();
        assert_eq!(updated.created_at, existing.created_at);
        assert_eq!(updated.title, "Renamed");
    }

    #[test]
    fn unchecked_published_box_makes_a_draft() {
        let mut f = form("Draft", "");
        f.published = None;
        assert!(!f.into_entry(None).unwrap().published);
    }

    #[test]
    fn entry_serializes_with_camel_case_field_names() {
        let entry = form("Hello World", "").into_entry(None).unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "blog");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("readTime").is_some());
        assert!(json.get("coverImage").is_none());
    }

    #[test]
    fn contact_requires_every_field() {
        let input = ContactInput {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: " ".into(),
        };
        assert_eq!(input.validate(), Err(ValidationError::MissingField("message")));
    }
}
