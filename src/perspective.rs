use serde::{Deserialize, Serialize};

use crate::lexicon::{Dimension, DimensionLexicon};
use crate::tokenize::Normalized;

const UNIFORM: f64 = 0.25;

/// Four dimension weights, positionally aligned with `dimensions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerspectiveVector {
    pub dimensions: Vec<Dimension>,
    pub values: Vec<f64>,
}

impl PerspectiveVector {
    pub fn uniform() -> Self {
        Self::from_values([UNIFORM; 4])
    }

    pub fn from_values(values: [f64; 4]) -> Self {
        Self {
            dimensions: Dimension::ALL.to_vec(),
            values: values.to_vec(),
        }
    }

    pub fn value(&self, dimension: Dimension) -> f64 {
        self.values
            .get(dimension.index())
            .copied()
            .unwrap_or_default()
    }

    /// Highest-weighted dimension; ties go to the earlier dimension.
    pub fn dominant(&self) -> Dimension {
        let mut best = Dimension::Factual;
        for d in Dimension::ALL {
            if self.value(d) > self.value(best) {
                best = d;
            }
        }
        best
    }
}

impl Default for PerspectiveVector {
    fn default() -> Self {
        Self::uniform()
    }
}

/// Keyword-density scorer over the four perspective dimensions.
#[derive(Debug, Clone, Default)]
pub struct PerspectiveAnalyzer {
    lexicon: DimensionLexicon,
}

impl PerspectiveAnalyzer {
    pub fn new(lexicon: DimensionLexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &DimensionLexicon {
        &self.lexicon
    }

    pub fn analyze_perspective(&self, text: &str) -> PerspectiveVector {
        self.score(&Normalized::new(text))
    }

    /// Each keyword counts at most once, by substring containment in the
    /// lower-cased text (not token equality: "data" also hits "database").
    pub fn score(&self, normalized: &Normalized) -> PerspectiveVector {
        let word_count = normalized.word_count();
        let mut raw = [0.0_f64; 4];

        for (dimension, keywords) in self.lexicon.iter() {
            let hits = keywords
                .iter()
                .filter(|k| normalized.lower.contains(k.as_str()))
                .count();
            raw[dimension.index()] = if word_count > 0 {
                hits as f64 / word_count as f64
            } else {
                0.0
            };
        }

        let total: f64 = raw.iter().sum();
        if total <= 0.0 {
            return PerspectiveVector::uniform();
        }
        PerspectiveVector::from_values(raw.map(|v| v / total))
    }
}
