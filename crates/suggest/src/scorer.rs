//! Weighted term scoring for knowledge-base articles
//!
//! A simple weighted-term model. Each query term contributes independently:
//! tag matches dominate, title matches help, a hit in the leading slice of
//! the content adds a little. Exact and partial tag matches are mutually
//! exclusive per term; title and content contributions stack on top.
//!
//! Weights live here as named constants because downstream ordering
//! guarantees depend on their exact values.

use intake_core::Article;

/// Contribution of a query term equal to an article tag
pub const TAG_EXACT_WEIGHT: u32 = 5;

/// Contribution of a query term contained in an article tag
///
/// Only applied when no tag matched the term exactly.
pub const TAG_PARTIAL_WEIGHT: u32 = 3;

/// Contribution of a query term contained in the article title
pub const TITLE_WEIGHT: u32 = 2;

/// Contribution of a query term contained in the content preview
pub const CONTENT_WEIGHT: u32 = 1;

/// Length of the content slice scanned per article, in characters
///
/// Bodies can be long; only the leading slice participates in scoring.
pub const CONTENT_PREVIEW_CHARS: usize = 500;

/// Score one article against a prepared term list
///
/// Terms must already be lowercase (see
/// [`tokenize_query`](crate::tokenizer::tokenize_query)); article text is
/// lowercased here. Returns 0 for an empty term list.
pub fn score_article(article: &Article, terms: &[String]) -> u32 {
    if terms.is_empty() {
        return 0;
    }

    let tags: Vec<String> = article.tags.iter().map(|t| t.to_lowercase()).collect();
    let title = article.title.to_lowercase();
    let preview: String = article
        .content
        .chars()
        .take(CONTENT_PREVIEW_CHARS)
        .collect::<String>()
        .to_lowercase();

    let mut score = 0;
    for term in terms {
        if tags.iter().any(|tag| tag == term) {
            score += TAG_EXACT_WEIGHT;
        } else if tags.iter().any(|tag| tag.contains(term.as_str())) {
            score += TAG_PARTIAL_WEIGHT;
        }

        if title.contains(term.as_str()) {
            score += TITLE_WEIGHT;
        }
        if preview.contains(term.as_str()) {
            score += CONTENT_WEIGHT;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_exact_tag_match() {
        let article = Article::new(1, "Some guide", "Nothing relevant.")
            .with_tags(vec!["printer".into()]);
        assert_eq!(score_article(&article, &terms(&["printer"])), TAG_EXACT_WEIGHT);
    }

    #[test]
    fn test_partial_tag_match() {
        let article = Article::new(1, "Some guide", "Nothing relevant.")
            .with_tags(vec!["printers".into()]);
        assert_eq!(
            score_article(&article, &terms(&["printer"])),
            TAG_PARTIAL_WEIGHT
        );
    }

    #[test]
    fn test_exact_and_partial_are_mutually_exclusive() {
        // Both an exact and a containing tag are present; only the exact
        // weight applies for the term.
        let article = Article::new(1, "Some guide", "Nothing relevant.")
            .with_tags(vec!["printer".into(), "printers".into()]);
        assert_eq!(score_article(&article, &terms(&["printer"])), TAG_EXACT_WEIGHT);
    }

    #[test]
    fn test_title_and_content_stack_on_tags() {
        let article = Article::new(1, "Fixing printer issues", "The printer needs a restart.")
            .with_tags(vec!["printer".into()]);
        assert_eq!(
            score_article(&article, &terms(&["printer"])),
            TAG_EXACT_WEIGHT + TITLE_WEIGHT + CONTENT_WEIGHT
        );
    }

    #[test]
    fn test_tag_matching_is_case_insensitive() {
        let article = Article::new(1, "Guide", "Body.").with_tags(vec!["Printer".into()]);
        assert_eq!(score_article(&article, &terms(&["printer"])), TAG_EXACT_WEIGHT);
    }

    #[test]
    fn test_content_beyond_preview_ignored() {
        let mut content = "x".repeat(CONTENT_PREVIEW_CHARS);
        content.push_str(" offline");
        let article = Article::new(1, "Guide", content);
        assert_eq!(score_article(&article, &terms(&["offline"])), 0);
    }

    #[test]
    fn test_content_inside_preview_counts() {
        let article = Article::new(1, "Guide", "The device went offline overnight.");
        assert_eq!(score_article(&article, &terms(&["offline"])), CONTENT_WEIGHT);
    }

    #[test]
    fn test_terms_accumulate() {
        let article = Article::new(1, "Printer offline", "Restart the printer.")
            .with_tags(vec!["printer".into()]);
        // "printer": 5 (tag) + 2 (title) + 1 (content); "offline": 2 (title)
        assert_eq!(score_article(&article, &terms(&["printer", "offline"])), 10);
    }

    #[test]
    fn test_no_match_scores_zero() {
        let article = Article::new(1, "Guide", "Body.").with_tags(vec!["network".into()]);
        assert_eq!(score_article(&article, &terms(&["printer"])), 0);
    }

    #[test]
    fn test_empty_terms_score_zero() {
        let article = Article::new(1, "Guide", "Body.");
        assert_eq!(score_article(&article, &[]), 0);
    }
}
