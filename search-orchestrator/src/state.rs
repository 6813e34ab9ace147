use review_analytics::ReviewRecord;
use serde::{Deserialize, Serialize};

/// What the view layer renders for the active query.
///
/// `results` and `error` are reset at the start of every search, so a
/// previous query's data is never shown under a new heading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    pub query: String,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Sticky until toggled, or forced on by a failed probe.
    pub is_demo_mode: bool,
    pub results: Vec<ReviewRecord>,
}

/// Session lifecycle.
///
/// `Idle → Probing → {DemoActive, LiveReady} → Searching → back to
/// DemoActive/LiveReady` once the search completes or fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Probing,
    DemoActive,
    LiveReady,
    Searching,
}

/// Read-only copy of the session for the view layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub state: QueryState,
    /// Connection status line, e.g. "Backend Offline".
    pub status: String,
    pub phase: Phase,
}

/// Mutable session owned by the orchestrator.
#[derive(Debug)]
pub(crate) struct Session {
    pub query: QueryState,
    pub status: String,
    pub phase: Phase,
    /// Id of the most recently started search; only it may publish.
    pub generation: u64,
    /// Query last fired by an on-load replay.
    pub replayed: Option<String>,
}

impl Session {
    pub fn new(demo: bool) -> Self {
        Self {
            query: QueryState {
                is_demo_mode: demo,
                ..QueryState::default()
            },
            status: if demo {
                crate::STATUS_DEMO.to_string()
            } else {
                crate::STATUS_DISCONNECTED.to_string()
            },
            phase: if demo { Phase::DemoActive } else { Phase::Idle },
            generation: 0,
            replayed: None,
        }
    }

    /// Phase to return to when nothing is in flight.
    pub fn resting_phase(&self) -> Phase {
        if self.query.is_demo_mode {
            Phase::DemoActive
        } else {
            Phase::LiveReady
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            state: self.query.clone(),
            status: self.status.clone(),
            phase: self.phase,
        }
    }
}
