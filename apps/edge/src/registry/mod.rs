//! Static article metadata registry — the source of truth for crawler-facing
//! blog metadata. Built once from the embedded `articles.json` at startup,
//! validated record by record, then frozen; the request path only ever reads.
//!
//! The table must be kept in sync with the blog content published in the SPA.
//! A slug missing here is not an error at request time (crawlers fall through
//! to the app shell), but it is a content gap to track when publishing.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::RegistryError;

/// Raw registry row exactly as authored in `articles.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub description: String,
    pub author: String,
    /// Publish date in `YYYY-MM-DD` form.
    pub date: String,
    pub category: String,
    /// Absolute URL of the social-sharing image. Consumers assume a
    /// 1200×630-appropriate asset; the resolution is not validated.
    pub image: String,
}

/// A validated article, frozen at startup. The date is held parsed so the
/// render path cannot fail on it.
#[derive(Debug, Clone)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub author: String,
    pub date: NaiveDate,
    pub category: String,
    pub image: String,
}

/// Immutable slug → article map. Read-only for the lifetime of the process;
/// a redeploy is the only update path, so there is nothing to invalidate.
#[derive(Debug)]
pub struct ArticleRegistry {
    articles: HashMap<String, Article>,
}

const ARTICLES_JSON: &str = include_str!("articles.json");

impl ArticleRegistry {
    /// Builds the registry from the embedded article table, validating every
    /// record. Called once from `main`; any data defect aborts boot.
    pub fn load() -> Result<Self, RegistryError> {
        Self::from_json(ARTICLES_JSON)
    }

    /// Builds a registry from an arbitrary JSON table. Split out of [`load`]
    /// so tests can exercise validation against hand-written tables.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let records: HashMap<String, ArticleRecord> = serde_json::from_str(json)?;

        let mut articles = HashMap::with_capacity(records.len());
        for (slug, record) in records {
            let article = validate_record(&slug, record)?;
            articles.insert(slug, article);
        }

        Ok(ArticleRegistry { articles })
    }

    /// Exact-match lookup — no normalization, no fuzzy matching. A miss is
    /// normal control flow (unpublished, removed, or mistyped slug).
    pub fn resolve(&self, slug: &str) -> Option<&Article> {
        self.articles.get(slug)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

fn validate_record(slug: &str, record: ArticleRecord) -> Result<Article, RegistryError> {
    if slug.is_empty() || slug.contains(|c: char| c == '/' || c.is_whitespace()) {
        return Err(RegistryError::BadSlug {
            slug: slug.to_string(),
        });
    }

    for (field, value) in [
        ("title", &record.title),
        ("description", &record.description),
        ("author", &record.author),
        ("category", &record.category),
    ] {
        if value.trim().is_empty() {
            return Err(RegistryError::EmptyField {
                slug: slug.to_string(),
                field,
            });
        }
    }

    let date =
        NaiveDate::parse_from_str(&record.date, "%Y-%m-%d").map_err(|_| RegistryError::BadDate {
            slug: slug.to_string(),
            value: record.date.clone(),
        })?;

    if !record.image.starts_with("https://") && !record.image.starts_with("http://") {
        return Err(RegistryError::BadImageUrl {
            slug: slug.to_string(),
            value: record.image.clone(),
        });
    }

    Ok(Article {
        title: record.title,
        description: record.description,
        author: record.author,
        date,
        category: record.category,
        image: record.image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json(date: &str, image: &str) -> String {
        format!(
            r#"{{"my-post": {{
                "title": "A Post",
                "description": "About things.",
                "author": "Jane Roe",
                "date": "{date}",
                "category": "writing-tips",
                "image": "{image}"
            }}}}"#
        )
    }

    #[test]
    fn test_embedded_table_loads_and_validates() {
        let registry = ArticleRegistry::load().expect("embedded articles.json must be valid");
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_resolve_known_slug() {
        let registry = ArticleRegistry::load().unwrap();
        let article = registry
            .resolve("beat-the-bots-in-2025-ats-friendly-resume-blueprint")
            .expect("seed article must be present");
        assert_eq!(article.author, "Emmanuel Dylan");
        assert_eq!(article.date, NaiveDate::from_ymd_opt(2025, 10, 30).unwrap());
    }

    #[test]
    fn test_resolve_unknown_slug_is_none() {
        let registry = ArticleRegistry::load().unwrap();
        assert!(registry.resolve("does-not-exist").is_none());
    }

    #[test]
    fn test_resolve_is_exact_match_only() {
        let registry = ArticleRegistry::load().unwrap();
        // No case folding or trimming — the key must match byte for byte.
        assert!(registry
            .resolve("Beat-The-Bots-In-2025-Ats-Friendly-Resume-Blueprint")
            .is_none());
        assert!(registry.resolve("how-long-should-a-resume-be/").is_none());
    }

    #[test]
    fn test_valid_record_parses_date() {
        let registry =
            ArticleRegistry::from_json(&record_json("2025-01-15", "https://cdn.example.com/x.png"))
                .unwrap();
        let article = registry.resolve("my-post").unwrap();
        assert_eq!(article.date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    }

    #[test]
    fn test_malformed_date_rejected() {
        let err = ArticleRegistry::from_json(&record_json("30-10-2025", "https://c.example/x.png"))
            .unwrap_err();
        assert!(matches!(err, RegistryError::BadDate { .. }));
    }

    #[test]
    fn test_impossible_date_rejected() {
        let err = ArticleRegistry::from_json(&record_json("2025-02-30", "https://c.example/x.png"))
            .unwrap_err();
        assert!(matches!(err, RegistryError::BadDate { .. }));
    }

    #[test]
    fn test_relative_image_url_rejected() {
        let err =
            ArticleRegistry::from_json(&record_json("2025-01-15", "/blog/x.png")).unwrap_err();
        assert!(matches!(err, RegistryError::BadImageUrl { .. }));
    }

    #[test]
    fn test_empty_title_rejected() {
        let json = r#"{"my-post": {
            "title": "   ",
            "description": "About things.",
            "author": "Jane Roe",
            "date": "2025-01-15",
            "category": "writing-tips",
            "image": "https://cdn.example.com/x.png"
        }}"#;
        let err = ArticleRegistry::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::EmptyField { field: "title", .. }
        ));
    }

    #[test]
    fn test_slug_with_spaces_rejected() {
        let json = r#"{"my post": {
            "title": "A Post",
            "description": "About things.",
            "author": "Jane Roe",
            "date": "2025-01-15",
            "category": "writing-tips",
            "image": "https://cdn.example.com/x.png"
        }}"#;
        let err = ArticleRegistry::from_json(json).unwrap_err();
        assert!(matches!(err, RegistryError::BadSlug { .. }));
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let json = r#"{"my-post": {"title": "A Post"}}"#;
        let err = ArticleRegistry::from_json(json).unwrap_err();
        assert!(matches!(err, RegistryError::Parse(_)));
    }
}
