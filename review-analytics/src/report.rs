//! Business-intelligence report and the combined dashboard read model.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::{Distribution, Metrics, distribution, summarize};
use crate::model::ReviewRecord;
use crate::trend::{TrendBucket, trend_series};

/// How many products `trending_products` keeps.
const TRENDING_LIMIT: usize = 5;

/// A label with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Aggregate statistics over a whole result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub total_reviews: usize,
    /// Mean score, two decimals.
    pub average_sentiment: f64,
    pub sentiment_distribution: Distribution,
    /// Most reviewed products, most frequent first.
    pub trending_products: Vec<LabelCount>,
    /// Reviews per marketplace in first-seen order.
    pub source_breakdown: Vec<LabelCount>,
    /// Sample standard deviation of scores, two decimals.
    pub volatility: f64,
}

impl AnalyticsReport {
    pub fn build(records: &[ReviewRecord]) -> Self {
        let scores: Vec<f64> = records.iter().map(|r| r.score.value()).collect();
        let n = scores.len();

        let mean = if n == 0 {
            0.0
        } else {
            scores.iter().sum::<f64>() / n as f64
        };

        let volatility = if n > 1 {
            let var = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            round2(var.sqrt())
        } else {
            0.0
        };

        let mut trending = count_in_order(records.iter().map(|r| r.product.as_str()));
        // stable sort keeps first-seen order among ties
        trending.sort_by(|a, b| b.count.cmp(&a.count));
        trending.truncate(TRENDING_LIMIT);

        let report = Self {
            total_reviews: n,
            average_sentiment: round2(mean),
            sentiment_distribution: distribution(records),
            trending_products: trending,
            source_breakdown: count_in_order(records.iter().map(ReviewRecord::source_label)),
            volatility,
        };
        debug!(
            total = report.total_reviews,
            products = report.trending_products.len(),
            "analytics report built"
        );
        report
    }
}

/// Everything the dashboard renders for one result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub total_reviews: usize,
    pub metrics: Metrics,
    pub distribution: Distribution,
    pub trend: Vec<TrendBucket>,
    pub report: AnalyticsReport,
}

impl DashboardView {
    pub fn build(records: &[ReviewRecord]) -> Self {
        Self {
            total_reviews: records.len(),
            metrics: summarize(records),
            distribution: distribution(records),
            trend: trend_series(records),
            report: AnalyticsReport::build(records),
        }
    }
}

fn count_in_order<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<LabelCount> {
    let mut out: Vec<LabelCount> = Vec::new();
    for label in labels {
        match out.iter_mut().find(|c| c.label == label) {
            Some(c) => c.count += 1,
            None => out.push(LabelCount {
                label: label.to_string(),
                count: 1,
            }),
        }
    }
    out
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sentiment;

    fn rec(product: &str, score: f64, source: Option<&str>) -> ReviewRecord {
        let sentiment = if score > 0.1 {
            Sentiment::Positive
        } else if score < -0.1 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };
        ReviewRecord::new(product, "text", sentiment, score, source)
    }

    #[test]
    fn empty_report_is_zeroed() {
        let r = AnalyticsReport::build(&[]);
        assert_eq!(r.total_reviews, 0);
        assert_eq!(r.average_sentiment, 0.0);
        assert_eq!(r.volatility, 0.0);
        assert!(r.trending_products.is_empty());
        assert!(r.source_breakdown.is_empty());
    }

    #[test]
    fn single_record_has_no_volatility() {
        let r = AnalyticsReport::build(&[rec("A", 0.5, None)]);
        assert_eq!(r.volatility, 0.0);
        assert_eq!(r.average_sentiment, 0.5);
    }

    #[test]
    fn volatility_is_sample_std_dev() {
        // scores 0.5, -0.5: mean 0, sample var = 0.5, std ~ 0.7071
        let r = AnalyticsReport::build(&[rec("A", 0.5, None), rec("A", -0.5, None)]);
        assert_eq!(r.volatility, 0.71);
        assert_eq!(r.average_sentiment, 0.0);
    }

    #[test]
    fn trending_products_ranked_with_stable_ties() {
        let rows = vec![
            rec("B", 0.2, None),
            rec("A", 0.2, None),
            rec("A", 0.2, None),
            rec("C", 0.2, None),
            rec("D", 0.2, None),
            rec("E", 0.2, None),
            rec("F", 0.2, None),
        ];
        let r = AnalyticsReport::build(&rows);
        let names: Vec<&str> = r.trending_products.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D", "E"]);
        assert_eq!(r.trending_products[0].count, 2);
    }

    #[test]
    fn missing_source_is_grouped_as_unknown() {
        let rows = vec![
            rec("A", 0.2, Some("Flipkart")),
            rec("A", 0.2, None),
            rec("A", 0.2, Some("Amazon")),
            rec("A", 0.2, Some("")),
        ];
        let r = AnalyticsReport::build(&rows);
        assert_eq!(
            r.source_breakdown,
            vec![
                LabelCount { label: "Flipkart".into(), count: 1 },
                LabelCount { label: "Unknown".into(), count: 2 },
                LabelCount { label: "Amazon".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn dashboard_view_bundles_all_parts() {
        let rows = crate::demo::synthesize("Widget");
        let view = DashboardView::build(&rows);
        assert_eq!(view.total_reviews, 5);
        assert_eq!(view.trend.len(), 10);
        assert_eq!(view.distribution.total(), 5);
        assert_eq!(view.report.sentiment_distribution, view.distribution);
        assert_eq!(view.metrics, summarize(&rows));
    }
}
