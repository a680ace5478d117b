//! Deterministic message analysis: sentiment polarity, perspective
//! dimensions, and cognitive-bias findings for a single message.
//!
//! Every analyzer is a pure function of its configuration and the input
//! text. A [`MessageAnalyzer`] is built once and shared across threads.

pub mod bias;
pub mod config;
pub mod discussion;
pub mod error;
pub mod lexicon;
pub mod perspective;
pub mod sentiment;
pub mod tokenize;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::trace;
use uuid::Uuid;

pub use bias::{
    analyze_text, detect_biases, seeded_biases, BiasDefinition, BiasDetector, BiasFinding,
    BiasPatternTable, BiasReport, NO_EVIDENCE,
};
pub use config::EngineConfig;
pub use discussion::{BiasTally, DiscussionSummary};
pub use error::{AnalysisError, Result};
pub use lexicon::{Dimension, DimensionLexicon, LexiconSet};
pub use perspective::{PerspectiveAnalyzer, PerspectiveVector};
pub use sentiment::SentimentAnalyzer;
pub use tokenize::Normalized;

/// Messages longer than this many bytes are refused by
/// [`MessageAnalyzer::analyze_message`].
pub const DEFAULT_MAX_TEXT_LEN: usize = 20_000;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// The three signals computed for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageSignals {
    pub sentiment_score: f64,
    pub perspective_vector: PerspectiveVector,
    pub detected_biases: BiasReport,
}

/// Signals stamped with identity and time, ready for storage by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub message_id: String,
    pub sentiment_score: f64,
    pub perspective_vector: PerspectiveVector,
    pub detected_biases: BiasReport,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisRecord {
    pub fn new(message_id: impl Into<String>, signals: MessageSignals) -> Self {
        Self {
            id: Uuid::new_v4(),
            message_id: message_id.into(),
            sentiment_score: signals.sentiment_score,
            perspective_vector: signals.perspective_vector,
            detected_biases: signals.detected_biases,
            analyzed_at: Utc::now(),
        }
    }

    pub fn biases(&self) -> &[BiasFinding] {
        &self.detected_biases.biases
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct MessageAnalyzer {
    sentiment: SentimentAnalyzer,
    perspective: PerspectiveAnalyzer,
    bias: BiasDetector,
    max_text_len: usize,
}

impl MessageAnalyzer {
    pub fn new(lexicon: LexiconSet, dimensions: DimensionLexicon, biases: BiasPatternTable) -> Self {
        Self {
            sentiment: SentimentAnalyzer::new(lexicon),
            perspective: PerspectiveAnalyzer::new(dimensions),
            bias: BiasDetector::new(biases),
            max_text_len: DEFAULT_MAX_TEXT_LEN,
        }
    }

    pub fn with_max_text_len(mut self, max: usize) -> Self {
        self.max_text_len = max;
        self
    }

    pub fn max_text_len(&self) -> usize {
        self.max_text_len
    }

    pub fn sentiment(&self) -> &SentimentAnalyzer {
        &self.sentiment
    }

    pub fn perspective(&self) -> &PerspectiveAnalyzer {
        &self.perspective
    }

    pub fn bias_detector(&self) -> &BiasDetector {
        &self.bias
    }

    /// Run all three analyzers over `text`. Never fails and ignores the
    /// length limit.
    pub fn analyze(&self, text: &str) -> MessageSignals {
        self.signals(&Normalized::new(text))
    }

    fn signals(&self, normalized: &Normalized) -> MessageSignals {
        MessageSignals {
            sentiment_score: self.sentiment.score(normalized),
            perspective_vector: self.perspective.score(normalized),
            detected_biases: BiasReport {
                biases: self.bias.detect_normalized(normalized),
            },
        }
    }

    /// Analyze one stored message and build its record.
    pub fn analyze_message(&self, message_id: &str, text: &str) -> Result<AnalysisRecord> {
        if text.len() > self.max_text_len {
            return Err(AnalysisError::TextTooLong {
                len: text.len(),
                max: self.max_text_len,
            });
        }
        let normalized = Normalized::new(text);
        let signals = self.signals(&normalized);
        trace!(
            message_id,
            tokens = normalized.word_count(),
            sentiment = signals.sentiment_score,
            biases = signals.detected_biases.biases.len(),
            "Analyzed message"
        );
        Ok(AnalysisRecord::new(message_id, signals))
    }
}

impl Default for MessageAnalyzer {
    fn default() -> Self {
        Self::new(
            LexiconSet::default(),
            DimensionLexicon::default(),
            BiasPatternTable::seeded(),
        )
    }
}

static DEFAULT_ANALYZER: Lazy<MessageAnalyzer> = Lazy::new(MessageAnalyzer::default);

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Analyze `text` with the built-in lexicons and the seeded bias catalog.
pub fn analyze(text: &str) -> MessageSignals {
    DEFAULT_ANALYZER.analyze(text)
}

pub fn analyze_sentiment(text: &str) -> f64 {
    DEFAULT_ANALYZER.sentiment().analyze_sentiment(text)
}

pub fn analyze_perspective(text: &str) -> PerspectiveVector {
    DEFAULT_ANALYZER.perspective().analyze_perspective(text)
}
