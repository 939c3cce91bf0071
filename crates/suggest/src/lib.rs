//! Knowledge-base suggestion ranking for ticket intake
//!
//! This crate provides:
//! - combined_query / tokenize_query: query preparation from free-text input
//! - score_article: the weighted term scorer and its pinned weights
//! - rank: top-N ordering with the popularity tie break
//!
//! The whole pipeline is a pure function of its inputs: no I/O, no caches,
//! no clocks. Callers debounce keystrokes and fetch candidate articles
//! themselves; this crate only decides which of them deserve a slot next to
//! the form.
//!
//! # Usage
//!
//! ```
//! use intake_core::Article;
//! use intake_suggest::{rank, DEFAULT_SUGGESTION_LIMIT};
//!
//! let articles = vec![
//!     Article::new(1, "Fixing printer issues", "If the printer is offline, restart it.")
//!         .with_tags(vec!["printer".into()]),
//! ];
//!
//! let suggestions = rank("printer offline", &articles, DEFAULT_SUGGESTION_LIMIT);
//! assert_eq!(suggestions[0].article.id, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod rank;
pub mod scorer;
pub mod tokenizer;

pub use rank::{rank, DEFAULT_SUGGESTION_LIMIT};
pub use scorer::{
    score_article, CONTENT_PREVIEW_CHARS, CONTENT_WEIGHT, TAG_EXACT_WEIGHT, TAG_PARTIAL_WEIGHT,
    TITLE_WEIGHT,
};
pub use tokenizer::{combined_query, tokenize_query, MIN_QUERY_CHARS, MIN_TOKEN_CHARS};
