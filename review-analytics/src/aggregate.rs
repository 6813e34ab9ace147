//! Headline metrics and the sentiment histogram.

use serde::{Deserialize, Serialize};

use crate::model::{ReviewRecord, Sentiment};

/// Summary metrics for a result set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean score mapped from `[-1, 1]` onto a 0–5 rating, one decimal.
    pub avg_rating: f64,
    /// Share of `Positive` records, whole percent.
    pub positive_pct: u8,
    /// Share of `Negative` records, whole percent.
    pub negative_pct: u8,
}

/// Count of records per known sentiment label.
///
/// All three labels are always present; unrecognized labels are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Distribution {
    #[serde(rename = "Positive")]
    pub positive: usize,
    #[serde(rename = "Neutral")]
    pub neutral: usize,
    #[serde(rename = "Negative")]
    pub negative: usize,
}

impl Distribution {
    /// Adds one record's label to the tally.
    pub(crate) fn tally(&mut self, sentiment: &Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Other(_) => {}
        }
    }

    /// Sum over the three known labels.
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Label/count pairs in fixed chart order.
    pub fn entries(&self) -> [(&'static str, usize); 3] {
        [
            ("Positive", self.positive),
            ("Neutral", self.neutral),
            ("Negative", self.negative),
        ]
    }
}

/// Tallies sentiment labels over `records`.
pub fn distribution(records: &[ReviewRecord]) -> Distribution {
    let mut dist = Distribution::default();
    for r in records {
        dist.tally(&r.sentiment);
    }
    dist
}

/// Computes [`Metrics`] for `records`.
///
/// An empty set yields all zeros. Unparsable scores count as `0.0`.
pub fn summarize(records: &[ReviewRecord]) -> Metrics {
    let total = records.len();
    if total == 0 {
        return Metrics::default();
    }

    let sum: f64 = records.iter().map(|r| r.score.value()).sum();
    let avg_score = sum / total as f64;
    let avg_rating = ((avg_score + 1.0) * 2.5 * 10.0).round() / 10.0;

    let dist = distribution(records);

    Metrics {
        avg_rating,
        positive_pct: percent(dist.positive, total),
        negative_pct: percent(dist.negative, total),
    }
}

/// Whole percent of `part` in `total`, half rounded up.
fn percent(part: usize, total: usize) -> u8 {
    (part as f64 / total as f64 * 100.0).round().clamp(0.0, 100.0) as u8
}
