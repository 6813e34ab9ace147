//! Canonical shape of one analyzed review as delivered by the collector.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Source label used when a record carries no marketplace.
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// Sentiment label attached to a review.
///
/// The three known labels are matched exactly (`"Positive"`, `"Neutral"`,
/// `"Negative"`). Any other label is kept verbatim in [`Sentiment::Other`] so a
/// bad row never fails deserialization; tallies ignore it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
    /// Unrecognized label from upstream.
    Other(String),
}

impl Sentiment {
    /// Wire/display label.
    pub fn as_str(&self) -> &str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
            Sentiment::Other(label) => label,
        }
    }
}

impl From<String> for Sentiment {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Positive" => Sentiment::Positive,
            "Neutral" => Sentiment::Neutral,
            "Negative" => Sentiment::Negative,
            _ => Sentiment::Other(label),
        }
    }
}

impl From<&str> for Sentiment {
    fn from(label: &str) -> Self {
        Sentiment::from(label.to_string())
    }
}

impl From<Sentiment> for String {
    fn from(s: Sentiment) -> Self {
        match s {
            Sentiment::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

/// Empty label, used for rows stored without one; no tally counts it.
impl Default for Sentiment {
    fn default() -> Self {
        Sentiment::Other(String::new())
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signed sentiment intensity in `[-1.0, 1.0]`.
///
/// The collector stores a float, demo data and normalized rows carry a
/// 2-decimal string, and legacy rows may have `null`. All three shapes are
/// accepted as-is; [`Score::value`] is the only way numbers are read out.
/// Any other JSON shape (bool, object, array) decodes as [`Score::Missing`]
/// so one bad row never fails a whole fetch.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Score {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl Score {
    /// Numeric value; anything unparsable or non-finite reads as `0.0`.
    pub fn value(&self) -> f64 {
        let v = match self {
            Score::Number(n) => *n,
            Score::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            Score::Missing => 0.0,
        };
        // -0.0 would render as "-0.00"
        if !v.is_finite() || v == 0.0 { 0.0 } else { v }
    }

    /// Fixed 2-decimal textual form, e.g. `"0.85"` or `"0.00"`.
    pub fn normalized(&self) -> Score {
        Score::Text(format!("{:.2}", self.value()))
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScoreVisitor)
    }
}

struct ScoreVisitor;

impl<'de> Visitor<'de> for ScoreVisitor {
    type Value = Score;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, a numeric string or null")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Score, E> {
        Ok(Score::Number(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Score, E> {
        Ok(Score::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Score, E> {
        Ok(Score::Number(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Score, E> {
        Ok(Score::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Score, E> {
        Ok(Score::Text(v))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Score, E> {
        Ok(Score::Missing)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Score, E> {
        Ok(Score::Missing)
    }

    fn visit_none<E: de::Error>(self) -> Result<Score, E> {
        Ok(Score::Missing)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Score, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Score, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Score::Missing)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Score, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Score::Missing)
    }
}

impl From<f64> for Score {
    fn from(v: f64) -> Self {
        Score::Number(v)
    }
}

impl From<&str> for Score {
    fn from(v: &str) -> Self {
        Score::Text(v.to_string())
    }
}

/// One scored review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Product name/variant as scraped.
    #[serde(default, deserialize_with = "null_as_default")]
    pub product: String,
    /// Review body.
    #[serde(default, deserialize_with = "null_as_default")]
    pub review: String,
    /// `null` in storage reads as an empty label.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sentiment: Sentiment,
    #[serde(default)]
    pub score: Score,
    /// Originating marketplace (e.g. "Amazon", "Flipkart").
    #[serde(default)]
    pub source: Option<String>,
}

/// Stored columns are nullable; `null` reads as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ReviewRecord {
    pub fn new(
        product: impl Into<String>,
        review: impl Into<String>,
        sentiment: Sentiment,
        score: impl Into<Score>,
        source: Option<&str>,
    ) -> Self {
        Self {
            product: product.into(),
            review: review.into(),
            sentiment,
            score: score.into(),
            source: source.map(str::to_string),
        }
    }

    /// Marketplace label, `"Unknown"` when absent or blank.
    pub fn source_label(&self) -> &str {
        match self.source.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => UNKNOWN_SOURCE,
        }
    }
}
