use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").unwrap());

/// A message lower-cased once, plus its word tokens in order.
///
/// `lower` serves substring and pattern checks, `tokens` serves whole-word
/// lookups and word-count denominators. Every analyzer goes through this
/// type so the counts agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub lower: String,
    pub tokens: Vec<String>,
}

impl Normalized {
    pub fn new(text: &str) -> Self {
        let lower = text.to_lowercase();
        let tokens = WORD_RE
            .find_iter(&lower)
            .map(|m| m.as_str().to_string())
            .collect();
        Self { lower, tokens }
    }

    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
