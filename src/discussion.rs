use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::lexicon::Dimension;
use crate::perspective::PerspectiveVector;
use crate::AnalysisRecord;

/// Findings at or below this confidence are not tallied.
const TALLY_CONFIDENCE_MIN: f64 = 0.3;
const TOP_BIASES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasTally {
    pub name: String,
    pub occurrences: usize,
}

/// Roll-up of the records in one discussion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscussionSummary {
    pub discussion_id: String,
    pub message_count: usize,
    pub analyzed_messages: usize,
    pub mean_sentiment: f64,
    pub mean_perspective: PerspectiveVector,
    pub top_biases: Vec<BiasTally>,
}

impl DiscussionSummary {
    /// `message_count` is the number of messages in the discussion, which
    /// may exceed the number of records when some were never analyzed.
    pub fn from_records(
        discussion_id: impl Into<String>,
        message_count: usize,
        records: &[AnalysisRecord],
    ) -> Self {
        let analyzed = records.len();
        if analyzed == 0 {
            return Self {
                discussion_id: discussion_id.into(),
                message_count,
                analyzed_messages: 0,
                mean_sentiment: 0.0,
                mean_perspective: PerspectiveVector::uniform(),
                top_biases: vec![],
            };
        }

        let n = analyzed as f64;
        let mean_sentiment = records.iter().map(|r| r.sentiment_score).sum::<f64>() / n;

        let mut sums = [0.0_f64; 4];
        for record in records {
            for d in Dimension::ALL {
                sums[d.index()] += record.perspective_vector.value(d);
            }
        }
        let mean_perspective = PerspectiveVector::from_values(sums.map(|s| s / n));

        Self {
            discussion_id: discussion_id.into(),
            message_count,
            analyzed_messages: analyzed,
            mean_sentiment,
            mean_perspective,
            top_biases: tally_biases(records),
        }
    }
}

fn tally_biases(records: &[AnalysisRecord]) -> Vec<BiasTally> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for finding in records.iter().flat_map(|r| r.biases()) {
        if finding.confidence > TALLY_CONFIDENCE_MIN {
            *counts.entry(finding.name.as_str()).or_insert(0) += 1;
        }
    }

    let mut tallies: Vec<BiasTally> = counts
        .into_iter()
        .map(|(name, occurrences)| BiasTally {
            name: name.to_string(),
            occurrences,
        })
        .collect();
    tallies.sort_by(|a, b| {
        b.occurrences
            .cmp(&a.occurrences)
            .then_with(|| a.name.cmp(&b.name))
    });
    tallies.truncate(TOP_BIASES);
    tallies
}
