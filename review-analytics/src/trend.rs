//! Cumulative sentiment trend over the arrival order of a result set.
//!
//! There is no timestamp on a record; insertion order is the time axis. The
//! set is cut into [`TREND_BUCKETS`] prefixes of growing length and each bucket
//! counts every record up to its boundary, so volumes only ever grow.

use serde::{Deserialize, Serialize};

use crate::aggregate::Distribution;
use crate::model::ReviewRecord;

/// Number of buckets emitted for any non-empty set.
pub const TREND_BUCKETS: usize = 10;

/// Sentiment counts over one prefix of the result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendBucket {
    /// 1-based position (1..=10).
    pub bucket_index: usize,
    /// Display label, `T{k}`.
    pub label: String,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

/// Builds the cumulative trend series.
///
/// Empty input gives an empty series. Otherwise exactly [`TREND_BUCKETS`]
/// buckets are produced; bucket `k` covers the first
/// `min(k * ceil(n / 10), n)` records, so small sets plateau early and the
/// last bucket always equals the totals.
pub fn trend_series(records: &[ReviewRecord]) -> Vec<TrendBucket> {
    if records.is_empty() {
        return Vec::new();
    }

    let chunk_size = records.len().div_ceil(TREND_BUCKETS);
    let mut out = Vec::with_capacity(TREND_BUCKETS);
    let mut running = Distribution::default();
    let mut consumed = 0;

    for k in 1..=TREND_BUCKETS {
        let end = (k * chunk_size).min(records.len());
        for r in &records[consumed..end] {
            running.tally(&r.sentiment);
        }
        consumed = end;

        out.push(TrendBucket {
            bucket_index: k,
            label: format!("T{k}"),
            positive: running.positive,
            negative: running.negative,
            neutral: running.neutral,
        });
    }

    out
}
