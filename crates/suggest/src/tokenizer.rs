//! Query normalization and tokenization
//!
//! Suggestion queries come from free-text ticket input (title plus
//! description). Normalization is deliberately blunt: lowercase, split on
//! whitespace, drop tokens too short to carry signal.

/// Minimum character count before a query is worth running
pub const MIN_QUERY_CHARS: usize = 3;

/// Tokens at or below this character count are discarded
pub const MIN_TOKEN_CHARS: usize = 2;

/// Join ticket title and description into one query string
pub fn combined_query(title: &str, description: &str) -> String {
    format!("{title} {description}").trim().to_string()
}

/// Extract search terms from free text
///
/// Lowercases, splits on whitespace and keeps tokens longer than
/// [`MIN_TOKEN_CHARS`] characters.
///
/// # Example
///
/// ```
/// use intake_suggest::tokenizer::tokenize_query;
///
/// let terms = tokenize_query("My VPN is down");
/// assert_eq!(terms, vec!["vpn", "down"]);
/// ```
pub fn tokenize_query(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|t| t.chars().count() > MIN_TOKEN_CHARS)
        .map(String::from)
        .collect()
}

/// True when the trimmed text is shorter than [`MIN_QUERY_CHARS`]
pub fn below_min_length(text: &str) -> bool {
    text.trim().chars().count() < MIN_QUERY_CHARS
}
