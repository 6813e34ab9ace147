use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DemoModeResponse {
    /// Flag after the toggle, including a forced fallback.
    pub is_demo_mode: bool,
    pub status: String,
}
