//! Synthetic, query-scoped records for demo mode.
//!
//! Used when no collector is reachable so the dashboard still has something
//! to render. The catalogue is fixed; only the product prefix varies.

use crate::model::{ReviewRecord, Score, Sentiment};

/// (variant suffix, review, sentiment, score, source)
const CATALOGUE: [(&str, &str, Sentiment, &str, &str); 5] = [
    (
        "Pro",
        "Excellent quality and fast shipping.",
        Sentiment::Positive,
        "0.85",
        "Amazon",
    ),
    (
        "Lite",
        "Not worth the price, broke easily.",
        Sentiment::Negative,
        "-0.60",
        "Flipkart",
    ),
    (
        "Standard",
        "It does the job, decent value.",
        Sentiment::Neutral,
        "0.00",
        "Amazon",
    ),
    (
        "Max",
        "Amazing features, highly recommended!",
        Sentiment::Positive,
        "0.92",
        "Flipkart",
    ),
    (
        "Mini",
        "Too small and battery life is bad.",
        Sentiment::Negative,
        "-0.30",
        "Amazon",
    ),
];

/// Builds the demo result set for `query`.
///
/// Every product is `"{query} {variant}"`, so the set is already scoped to the
/// query and does not go through the relevance filter.
pub fn synthesize(query: &str) -> Vec<ReviewRecord> {
    CATALOGUE
        .iter()
        .map(|(variant, review, sentiment, score, source)| ReviewRecord {
            product: format!("{query} {variant}"),
            review: (*review).to_string(),
            sentiment: sentiment.clone(),
            score: Score::from(*score),
            source: Some((*source).to_string()),
        })
        .collect()
}
