use serde::Deserialize;

/// Address parameters of the analysis page (`/analysis?q=..`).
#[derive(Debug, Deserialize)]
pub struct AnalysisParams {
    #[serde(default)]
    pub q: Option<String>,
}
