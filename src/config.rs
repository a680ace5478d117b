// TOML configuration for the analysis engine.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::bias::{BiasDefinition, BiasPatternTable};
use crate::error::{AnalysisError, Result};
use crate::lexicon::{Dimension, DimensionLexicon, LexiconSet};
use crate::{MessageAnalyzer, DEFAULT_MAX_TEXT_LEN};

/// Top-level config structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Largest message, in bytes, `MessageAnalyzer::analyze_message` accepts
    pub max_text_len: Option<usize>,
    #[serde(default)]
    pub sentiment: SentimentConfig,
    #[serde(default)]
    pub perspective: PerspectiveConfig,
    /// Replaces the seeded catalog when non-empty
    #[serde(default, rename = "bias")]
    pub biases: Vec<BiasEntry>,
}

/// Each list, when present, replaces the built-in one
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SentimentConfig {
    pub positive: Option<Vec<String>>,
    pub negative: Option<Vec<String>>,
    pub intensifiers: Option<Vec<String>>,
    pub negators: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PerspectiveConfig {
    pub factual: Option<Vec<String>>,
    pub emotional: Option<Vec<String>>,
    pub logical: Option<Vec<String>>,
    pub intuitive: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BiasEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub patterns: Vec<String>,
    #[serde(default)]
    pub mitigation: String,
}

impl From<BiasEntry> for BiasDefinition {
    fn from(entry: BiasEntry) -> Self {
        BiasDefinition {
            name: entry.name,
            description: entry.description,
            detection_patterns: entry.patterns,
            mitigation_strategies: entry.mitigation,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load config from `path`; a missing or malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        debug!(path = %path.display(), "Loaded engine config");
        Ok(config)
    }

    pub fn max_text_len(&self) -> usize {
        self.max_text_len.unwrap_or(DEFAULT_MAX_TEXT_LEN)
    }

    pub fn lexicon(&self) -> LexiconSet {
        let s = &self.sentiment;
        let mut lex = LexiconSet::default();
        if let Some(words) = &s.positive {
            lex = lex.with_positive(words);
        }
        if let Some(words) = &s.negative {
            lex = lex.with_negative(words);
        }
        if let Some(words) = &s.intensifiers {
            lex = lex.with_intensifiers(words);
        }
        if let Some(words) = &s.negators {
            lex = lex.with_negators(words);
        }
        lex
    }

    pub fn dimension_lexicon(&self) -> DimensionLexicon {
        let p = &self.perspective;
        let overrides = [
            (Dimension::Factual, &p.factual),
            (Dimension::Emotional, &p.emotional),
            (Dimension::Logical, &p.logical),
            (Dimension::Intuitive, &p.intuitive),
        ];
        overrides
            .into_iter()
            .fold(DimensionLexicon::default(), |lex, (dim, words)| match words {
                Some(words) => lex.with_keywords(dim, words),
                None => lex,
            })
    }

    pub fn bias_table(&self) -> Result<BiasPatternTable> {
        if self.biases.is_empty() {
            return Ok(BiasPatternTable::seeded());
        }
        if let Some(entry) = self.biases.iter().find(|b| b.name.trim().is_empty()) {
            return Err(AnalysisError::Config(format!(
                "bias entry with patterns {:?} has an empty name",
                entry.patterns
            )));
        }
        BiasPatternTable::from_definitions(self.biases.iter().cloned().map(Into::into).collect())
    }

    /// Compile everything into an analyzer. Pattern errors surface here,
    /// never per message.
    pub fn build(&self) -> Result<MessageAnalyzer> {
        let max = self.max_text_len();
        if max == 0 {
            return Err(AnalysisError::Config(
                "max_text_len must be greater than zero".to_string(),
            ));
        }
        Ok(MessageAnalyzer::new(
            self.lexicon(),
            self.dimension_lexicon(),
            self.bias_table()?,
        )
        .with_max_text_len(max))
    }
}
