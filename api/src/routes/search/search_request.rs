use serde::Deserialize;

/// Request body for `POST /api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Product name to search for, e.g. "iPhone 15".
    pub query: String,
}
