//! Client-side scoping of an unscoped fetch to the active query.

use tracing::debug;

use crate::model::ReviewRecord;

/// Keeps only records whose `product` contains `query` (case-insensitive).
///
/// The collector's store is additive, so a fetch returns every product ever
/// scraped. Relative order is preserved and each survivor's score is
/// rewritten to its fixed 2-decimal form. Applying the filter twice with the
/// same query is a no-op.
pub fn filter_relevant(records: &[ReviewRecord], query: &str) -> Vec<ReviewRecord> {
    let needle = query.to_lowercase();

    let out: Vec<ReviewRecord> = records
        .iter()
        .filter(|r| r.product.to_lowercase().contains(&needle))
        .map(|r| ReviewRecord {
            score: r.score.normalized(),
            ..r.clone()
        })
        .collect();

    debug!(
        query,
        fetched = records.len(),
        kept = out.len(),
        "relevance filter applied"
    );
    out
}
