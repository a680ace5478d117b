use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::tokenize::Normalized;

const CONFIDENCE_PER_MATCH: f64 = 0.2;
const CONFIDENCE_CAP: f64 = 0.9;
const CONFIDENCE_FLOOR: f64 = 0.1;

pub const NO_EVIDENCE: &str = "No strong evidence found";

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// A cognitive bias as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub detection_patterns: Vec<String>,
    #[serde(default)]
    pub mitigation_strategies: String,
}

impl BiasDefinition {
    pub fn new<I>(name: impl Into<String>, patterns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            name: name.into(),
            description: String::new(),
            detection_patterns: patterns.into_iter().map(Into::into).collect(),
            mitigation_strategies: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasFinding {
    pub name: String,
    pub confidence: f64,
    pub evidence: String,
}

/// Wire shape of detected biases: `{"biases": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BiasReport {
    pub biases: Vec<BiasFinding>,
}

// ---------------------------------------------------------------------------
// Seeded catalog
// ---------------------------------------------------------------------------

static SEEDED_BIASES: Lazy<Vec<BiasDefinition>> = Lazy::new(|| {
    vec![
        BiasDefinition {
            name: "Confirmation Bias".to_string(),
            description: "The tendency to search for, interpret, favor, and recall information in a way that confirms one's preexisting beliefs or hypotheses.".to_string(),
            detection_patterns: vec![
                "agreement with prior statements".to_string(),
                "ignoring contradictory evidence".to_string(),
                "selective information seeking".to_string(),
            ],
            mitigation_strategies: "Actively seek out contradictory evidence and alternative viewpoints.".to_string(),
        },
        BiasDefinition {
            name: "Anchoring Bias".to_string(),
            description: "The tendency to rely too heavily on the first piece of information encountered (the 'anchor') when making decisions.".to_string(),
            detection_patterns: vec![
                "fixation on initial values".to_string(),
                "insufficient adjustment from initial estimates".to_string(),
            ],
            mitigation_strategies: "Consider multiple reference points and deliberately challenge your initial impressions.".to_string(),
        },
        BiasDefinition {
            name: "Groupthink".to_string(),
            description: "The tendency for groups to make irrational decisions due to pressure to conform and avoid conflict.".to_string(),
            detection_patterns: vec![
                "lack of dissent".to_string(),
                "unanimous decisions".to_string(),
                "pressure to agree".to_string(),
            ],
            mitigation_strategies: "Assign someone to play devil's advocate and encourage diverse viewpoints.".to_string(),
        },
        BiasDefinition {
            name: "Availability Heuristic".to_string(),
            description: "The tendency to overestimate the likelihood of events that are more readily available in memory.".to_string(),
            detection_patterns: vec![
                "recency bias".to_string(),
                "vivid examples".to_string(),
                "emotionally charged reasoning".to_string(),
            ],
            mitigation_strategies: "Look at objective statistics and base rates rather than relying on memorable examples.".to_string(),
        },
        BiasDefinition {
            name: "Status Quo Bias".to_string(),
            description: "The preference for the current state of affairs and resistance to change.".to_string(),
            detection_patterns: vec![
                "resistance to change".to_string(),
                "preference for familiar options".to_string(),
                "risk aversion".to_string(),
            ],
            mitigation_strategies: "Evaluate options based on merit rather than familiarity, and consider the cost of inaction.".to_string(),
        },
    ]
});

// Seed patterns are plain phrases and always compile.
static SEEDED_TABLE: Lazy<BiasPatternTable> =
    Lazy::new(|| BiasPatternTable::from_definitions(SEEDED_BIASES.clone()).unwrap());

/// The five biases every workspace starts with.
pub fn seeded_biases() -> Vec<BiasDefinition> {
    SEEDED_BIASES.clone()
}

// ---------------------------------------------------------------------------
// Pattern table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct CompiledBias {
    name: String,
    patterns: Vec<Regex>,
}

/// Bias catalog with every pattern compiled once, case-insensitively.
///
/// Iteration order is catalog order, which is also the order findings are
/// reported in.
#[derive(Debug, Clone)]
pub struct BiasPatternTable {
    definitions: Vec<BiasDefinition>,
    compiled: Vec<CompiledBias>,
}

impl BiasPatternTable {
    /// Build from `(name, patterns)` pairs.
    pub fn new<I, N, P, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let definitions = entries
            .into_iter()
            .map(|(name, patterns)| BiasDefinition::new(name, patterns))
            .collect();
        Self::from_definitions(definitions)
    }

    pub fn from_definitions(definitions: Vec<BiasDefinition>) -> Result<Self> {
        let mut compiled = Vec::with_capacity(definitions.len());
        let mut pattern_count = 0;
        for def in &definitions {
            let patterns = def
                .detection_patterns
                .iter()
                .map(|p| compile_pattern(&def.name, p))
                .collect::<Result<Vec<_>>>()?;
            pattern_count += patterns.len();
            compiled.push(CompiledBias {
                name: def.name.clone(),
                patterns,
            });
        }
        debug!(
            biases = compiled.len(),
            patterns = pattern_count,
            "Compiled bias pattern table"
        );
        Ok(Self {
            definitions,
            compiled,
        })
    }

    pub fn seeded() -> Self {
        SEEDED_TABLE.clone()
    }

    pub fn definitions(&self) -> &[BiasDefinition] {
        &self.definitions
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.compiled.iter().map(|b| b.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }
}

impl Default for BiasPatternTable {
    fn default() -> Self {
        Self::seeded()
    }
}

fn compile_pattern(bias: &str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| AnalysisError::InvalidPattern {
            bias: bias.to_string(),
            pattern: pattern.to_string(),
            source,
        })
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

/// Find-all semantics: a pattern with exactly one capture group yields the
/// group text (empty when the group did not take part), anything else yields
/// the whole match. Empty matches count.
fn collect_evidence(re: &Regex, text: &str, evidence: &mut Vec<String>) {
    let single_group = re.captures_len() == 2;
    for caps in re.captures_iter(text) {
        let hit = if single_group {
            caps.get(1).map_or("", |m| m.as_str())
        } else {
            caps.get(0).map_or("", |m| m.as_str())
        };
        evidence.push(hit.to_string());
    }
}

fn confidence_for(matches: usize) -> f64 {
    if matches == 0 {
        return 0.0;
    }
    let raw = (CONFIDENCE_PER_MATCH * matches as f64).min(CONFIDENCE_CAP);
    (raw * 100.0).round() / 100.0
}

pub(crate) fn findings(normalized: &Normalized, table: &BiasPatternTable) -> Vec<BiasFinding> {
    let mut out = Vec::new();
    for bias in &table.compiled {
        let mut evidence = Vec::new();
        for re in &bias.patterns {
            collect_evidence(re, &normalized.lower, &mut evidence);
        }

        let confidence = confidence_for(evidence.len());
        if confidence <= CONFIDENCE_FLOOR {
            continue;
        }
        let evidence = if evidence.is_empty() {
            NO_EVIDENCE.to_string()
        } else {
            evidence.join(", ")
        };
        out.push(BiasFinding {
            name: bias.name.clone(),
            confidence,
            evidence,
        });
    }
    out
}

/// Biases whose patterns match `text`, in table order.
pub fn detect_biases(text: &str, table: &BiasPatternTable) -> Vec<BiasFinding> {
    findings(&Normalized::new(text), table)
}

pub fn analyze_text(text: &str, table: &BiasPatternTable) -> BiasReport {
    BiasReport {
        biases: detect_biases(text, table),
    }
}

/// Owns a compiled table and runs it over messages.
#[derive(Debug, Clone, Default)]
pub struct BiasDetector {
    table: BiasPatternTable,
}

impl BiasDetector {
    pub fn new(table: BiasPatternTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &BiasPatternTable {
        &self.table
    }

    pub fn detect_biases(&self, text: &str) -> Vec<BiasFinding> {
        detect_biases(text, &self.table)
    }

    pub fn analyze_text(&self, text: &str) -> BiasReport {
        analyze_text(text, &self.table)
    }

    pub fn detect_normalized(&self, normalized: &Normalized) -> Vec<BiasFinding> {
        findings(normalized, &self.table)
    }
}
