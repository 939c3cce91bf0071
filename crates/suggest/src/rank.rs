//! Top-N suggestion ranking
//!
//! Stateless and repeatable: identical inputs always produce the identical
//! output order. Ordering is score-descending with popularity as the tie
//! break; the underlying sort is stable, so articles that tie on both keep
//! their input order.

use crate::scorer::score_article;
use crate::tokenizer::{below_min_length, tokenize_query};
use intake_core::{Article, ScoredArticle};

/// Default number of suggestions surfaced next to the ticket form
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Rank candidate articles against free-text query input
///
/// Short-circuits to an empty result for queries under
/// [`MIN_QUERY_CHARS`](crate::tokenizer::MIN_QUERY_CHARS) characters, for
/// queries with no usable tokens, and for an empty candidate set. Articles
/// that score zero are dropped; the rest are ordered by descending score,
/// then descending view count, and truncated to `limit` with 1-indexed
/// ranks.
pub fn rank(query: &str, articles: &[Article], limit: usize) -> Vec<ScoredArticle> {
    let normalized = query.to_lowercase();
    if below_min_length(&normalized) || articles.is_empty() {
        return Vec::new();
    }
    let terms = tokenize_query(&normalized);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(u32, &Article)> = articles
        .iter()
        .filter_map(|article| {
            let score = score_article(article, &terms);
            (score > 0).then_some((score, article))
        })
        .collect();

    scored.sort_by(|(score_a, a), (score_b, b)| {
        score_b.cmp(score_a).then(b.views.cmp(&a.views))
    });

    scored
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, (score, article))| ScoredArticle::new(article.clone(), score, (i + 1) as u32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<Article> {
        vec![
            Article::new(1, "Fixing printer issues", "If the printer is offline, restart it.")
                .with_tags(vec!["printer".into()])
                .with_views(120),
            Article::new(2, "Printer driver downloads", "Drivers for all supported printers.")
                .with_tags(vec!["printers".into(), "drivers".into()])
                .with_views(300),
            Article::new(3, "Password reset", "Use the self-service portal.")
                .with_tags(vec!["password".into()])
                .with_views(900),
        ]
    }

    #[test]
    fn test_rank_orders_by_score() {
        let results = rank("printer offline", &candidates(), DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].article.id, 1);
        assert_eq!(results[1].article.id, 2);
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn test_rank_drops_zero_scores() {
        let results = rank("printer offline", &candidates(), DEFAULT_SUGGESTION_LIMIT);
        assert!(results.iter().all(|r| r.article.id != 3));
    }

    #[test]
    fn test_rank_short_query_empty() {
        assert!(rank("pc", &candidates(), DEFAULT_SUGGESTION_LIMIT).is_empty());
        assert!(rank("  a ", &candidates(), DEFAULT_SUGGESTION_LIMIT).is_empty());
    }

    #[test]
    fn test_rank_no_usable_tokens_empty() {
        // Long enough overall, but every token is too short to keep.
        assert!(rank("ab cd ef", &candidates(), DEFAULT_SUGGESTION_LIMIT).is_empty());
    }

    #[test]
    fn test_rank_empty_article_set_empty() {
        assert!(rank("printer offline", &[], DEFAULT_SUGGESTION_LIMIT).is_empty());
    }

    #[test]
    fn test_rank_ties_broken_by_views() {
        let articles = vec![
            Article::new(1, "VPN guide", "Connect to the VPN.").with_views(10),
            Article::new(2, "VPN setup", "Install the VPN client.").with_views(100),
        ];
        let results = rank("vpn", &articles, DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].article.id, 2);
        assert_eq!(results[1].article.id, 1);
    }

    #[test]
    fn test_rank_limit_truncates() {
        let articles: Vec<Article> = (0..8)
            .map(|i| {
                Article::new(i, format!("VPN article {i}"), "vpn body").with_views(i * 10)
            })
            .collect();
        let results = rank("vpn", &articles, 5);
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn test_rank_assigns_sequential_ranks() {
        let results = rank("printer offline", &candidates(), DEFAULT_SUGGESTION_LIMIT);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.rank as usize, i + 1);
        }
    }

    #[test]
    fn test_rank_query_case_insensitive() {
        let upper = rank("PRINTER Offline", &candidates(), DEFAULT_SUGGESTION_LIMIT);
        let lower = rank("printer offline", &candidates(), DEFAULT_SUGGESTION_LIMIT);
        let upper_ids: Vec<u64> = upper.iter().map(|r| r.article.id).collect();
        let lower_ids: Vec<u64> = lower.iter().map(|r| r.article.id).collect();
        assert_eq!(upper_ids, lower_ids);
    }
}
