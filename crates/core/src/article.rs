//! Knowledge-base article types
//!
//! This module defines:
//! - Article: a candidate knowledge-base record as returned by the article
//!   search endpoint
//! - ScoredArticle: an article annotated with its relevance score and rank
//!
//! Articles are immutable for the duration of a ranking pass. A
//! `ScoredArticle` is a derived, transient view that is never persisted.

use serde::{Deserialize, Serialize};

/// A candidate knowledge-base article
///
/// Matches the wire shape of the article search endpoint:
/// `{ id, title, content, tags, views, category_name }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article identifier
    pub id: u64,

    /// Article title
    pub title: String,

    /// Full content body
    pub content: String,

    /// Tag set used for high-weight matching
    #[serde(default)]
    pub tags: Vec<String>,

    /// Popularity counter; breaks score ties
    #[serde(default)]
    pub views: u64,

    /// Category label for display
    #[serde(default)]
    pub category_name: String,
}

impl Article {
    /// Create a new article with title and content
    pub fn new(id: u64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Article {
            id,
            title: title.into(),
            content: content.into(),
            tags: vec![],
            views: 0,
            category_name: String::new(),
        }
    }

    /// Builder: set tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Builder: set view counter
    pub fn with_views(mut self, views: u64) -> Self {
        self.views = views;
        self
    }

    /// Builder: set category label
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category_name = category.into();
        self
    }
}

/// An article annotated with its relevance score
///
/// Produced by the suggestion ranker; ordering within one result set is
/// encoded by `rank` (1-indexed, highest relevance first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredArticle {
    /// The underlying article
    pub article: Article,

    /// Accumulated relevance score (always positive in ranker output)
    pub score: u32,

    /// Position in the result set (1-indexed)
    pub rank: u32,
}

impl ScoredArticle {
    /// Create a new scored article
    pub fn new(article: Article, score: u32, rank: u32) -> Self {
        ScoredArticle {
            article,
            score,
            rank,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_new() {
        let article = Article::new(1, "VPN setup", "Step one: install the client.");
        assert_eq!(article.id, 1);
        assert_eq!(article.title, "VPN setup");
        assert!(article.tags.is_empty());
        assert_eq!(article.views, 0);
    }

    #[test]
    fn test_article_builder() {
        let article = Article::new(2, "Printer offline", "Power-cycle the printer.")
            .with_tags(vec!["printer".into(), "hardware".into()])
            .with_views(340)
            .with_category("Hardware");

        assert_eq!(article.tags.len(), 2);
        assert_eq!(article.views, 340);
        assert_eq!(article.category_name, "Hardware");
    }

    #[test]
    fn test_article_deserializes_wire_shape() {
        let json = r#"{
            "id": 17,
            "title": "Resetting your password",
            "content": "Use the self-service portal.",
            "tags": ["password", "account"],
            "views": 1200,
            "category_name": "Accounts"
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.id, 17);
        assert_eq!(article.tags, vec!["password", "account"]);
        assert_eq!(article.views, 1200);
        assert_eq!(article.category_name, "Accounts");
    }

    #[test]
    fn test_article_missing_optionals_default() {
        let article: Article =
            serde_json::from_str(r#"{"id": 1, "title": "t", "content": "c"}"#).unwrap();
        assert!(article.tags.is_empty());
        assert_eq!(article.views, 0);
        assert!(article.category_name.is_empty());
    }

    #[test]
    fn test_scored_article_new() {
        let article = Article::new(1, "t", "c");
        let scored = ScoredArticle::new(article.clone(), 8, 1);
        assert_eq!(scored.article, article);
        assert_eq!(scored.score, 8);
        assert_eq!(scored.rank, 1);
    }
}
