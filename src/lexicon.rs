use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Built-in word lists
// ---------------------------------------------------------------------------

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "positive",
    "wonderful",
    "fantastic",
    "amazing",
    "love",
    "best",
    "better",
    "superior",
    "outstanding",
    "happy",
    "glad",
    "pleased",
    "delighted",
    "agree",
    "correct",
    "right",
    "yes",
    "perfect",
    "impressive",
    "awesome",
];

// "no", "not" and "never" are also negators; the negator check wins.
const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "negative",
    "horrible",
    "worst",
    "worse",
    "inferior",
    "poor",
    "disappointing",
    "disagree",
    "wrong",
    "no",
    "not",
    "never",
    "dislike",
    "hate",
    "problem",
    "issue",
    "mistake",
    "error",
    "fail",
    "failure",
    "useless",
    "stupid",
];

const INTENSIFIERS: &[&str] = &[
    "very",
    "extremely",
    "incredibly",
    "absolutely",
    "completely",
    "totally",
    "utterly",
    "really",
    "truly",
    "highly",
];

// "n't" can never be produced by the tokenizer; kept so custom tokenizations
// that split contractions still negate.
const NEGATORS: &[&str] = &[
    "not", "n't", "no", "never", "none", "neither", "nor", "nothing",
];

const FACTUAL_KEYWORDS: &[&str] = &[
    "fact",
    "evidence",
    "data",
    "research",
    "study",
    "statistics",
    "proven",
    "measured",
    "observed",
    "documented",
    "verified",
    "objective",
    "empirical",
    "quantitative",
];

const EMOTIONAL_KEYWORDS: &[&str] = &[
    "feel",
    "feeling",
    "emotion",
    "emotional",
    "care",
    "worry",
    "excited",
    "happy",
    "sad",
    "angry",
    "frustrated",
    "concerned",
    "love",
    "hate",
    "fear",
    "hope",
    "passionate",
];

const LOGICAL_KEYWORDS: &[&str] = &[
    "logic",
    "reason",
    "therefore",
    "conclusion",
    "premise",
    "argument",
    "rational",
    "analyze",
    "consider",
    "evaluate",
    "assess",
    "implies",
    "consequently",
    "systematic",
];

const INTUITIVE_KEYWORDS: &[&str] = &[
    "intuition",
    "gut",
    "sense",
    "feeling",
    "instinct",
    "impression",
    "perceive",
    "insight",
    "hunch",
    "suspect",
    "believe",
    "imagine",
    "creative",
    "innovative",
    "vision",
];

fn lowered<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

// ---------------------------------------------------------------------------
// Sentiment lexicon
// ---------------------------------------------------------------------------

/// Word sets used by the sentiment walk.
///
/// The four sets are expected to be disjoint, except that a negator may also
/// be listed as a negative word: negators are checked first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconSet {
    positive: HashSet<String>,
    negative: HashSet<String>,
    intensifiers: HashSet<String>,
    negators: HashSet<String>,
}

impl LexiconSet {
    pub fn new<P, N, I, G>(positive: P, negative: N, intensifiers: I, negators: G) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
        I: IntoIterator,
        I::Item: AsRef<str>,
        G: IntoIterator,
        G::Item: AsRef<str>,
    {
        Self {
            positive: lowered(positive).into_iter().collect(),
            negative: lowered(negative).into_iter().collect(),
            intensifiers: lowered(intensifiers).into_iter().collect(),
            negators: lowered(negators).into_iter().collect(),
        }
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn is_intensifier(&self, word: &str) -> bool {
        self.intensifiers.contains(word)
    }

    pub fn is_negator(&self, word: &str) -> bool {
        self.negators.contains(word)
    }

    pub fn with_positive<I>(mut self, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.positive = lowered(words).into_iter().collect();
        self
    }

    pub fn with_negative<I>(mut self, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.negative = lowered(words).into_iter().collect();
        self
    }

    pub fn with_intensifiers<I>(mut self, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.intensifiers = lowered(words).into_iter().collect();
        self
    }

    pub fn with_negators<I>(mut self, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.negators = lowered(words).into_iter().collect();
        self
    }
}

impl Default for LexiconSet {
    fn default() -> Self {
        Self::new(POSITIVE_WORDS, NEGATIVE_WORDS, INTENSIFIERS, NEGATORS)
    }
}

// ---------------------------------------------------------------------------
// Perspective dimensions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Factual,
    Emotional,
    Logical,
    Intuitive,
}

impl Dimension {
    /// Output order of every perspective vector.
    pub const ALL: [Dimension; 4] = [
        Dimension::Factual,
        Dimension::Emotional,
        Dimension::Logical,
        Dimension::Intuitive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Factual => "factual",
            Dimension::Emotional => "emotional",
            Dimension::Logical => "logical",
            Dimension::Intuitive => "intuitive",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Dimension::Factual => 0,
            Dimension::Emotional => 1,
            Dimension::Logical => 2,
            Dimension::Intuitive => 3,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword lists per dimension, stored in `Dimension::ALL` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionLexicon {
    keywords: [Vec<String>; 4],
}

impl DimensionLexicon {
    pub fn keywords(&self, dimension: Dimension) -> &[String] {
        &self.keywords[dimension.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &[String])> {
        Dimension::ALL
            .into_iter()
            .map(move |d| (d, self.keywords(d)))
    }

    pub fn with_keywords<I>(mut self, dimension: Dimension, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.keywords[dimension.index()] = lowered(words);
        self
    }
}

impl Default for DimensionLexicon {
    fn default() -> Self {
        Self {
            keywords: [
                lowered(FACTUAL_KEYWORDS),
                lowered(EMOTIONAL_KEYWORDS),
                lowered(LOGICAL_KEYWORDS),
                lowered(INTUITIVE_KEYWORDS),
            ],
        }
    }
}
