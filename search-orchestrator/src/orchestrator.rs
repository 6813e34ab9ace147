//! Session state machine for search, connectivity and demo fallback.
//!
//! Every search takes a ticket carrying the session generation at the time
//! it started. Results are published only if that generation is still the
//! current one, so a slow response for an earlier query can never overwrite
//! the results of a later query.

use std::sync::Arc;

use collector_client::{ConnectivityStatus, ReviewCollector, probe};
use review_analytics::{DashboardView, ReviewRecord, filter_relevant, synthesize};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use crate::config::OrchestratorConfig;
use crate::errors::SearchError;
use crate::state::{Phase, QueryState, Session, SessionView};
use crate::{STATUS_CONNECTED, STATUS_DEMO, STATUS_DISCONNECTED, STATUS_OFFLINE};

/// How one search ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Results were published.
    Completed { count: usize },
    /// The error message was published; results stay empty.
    Failed { message: String },
    /// A newer search started first; nothing was published.
    Superseded,
}

/// Work order for one search, taken atomically with the state reset.
#[derive(Debug, Clone)]
struct SearchTicket {
    generation: u64,
    query: String,
    demo: bool,
}

/// Owns the search session and drives it against a [`ReviewCollector`].
pub struct SearchOrchestrator {
    collector: Arc<dyn ReviewCollector>,
    cfg: OrchestratorConfig,
    session: RwLock<Session>,
}

impl SearchOrchestrator {
    pub fn new(collector: Arc<dyn ReviewCollector>, cfg: OrchestratorConfig) -> Self {
        let session = Session::new(cfg.start_in_demo_mode);
        Self {
            collector,
            cfg,
            session: RwLock::new(session),
        }
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.cfg
    }

    // ---------------------------------------------------------------------
    // Connectivity
    // ---------------------------------------------------------------------

    /// Checks whether the collector is reachable and picks the session mode.
    ///
    /// Returns `None` without any network call when demo mode is already on.
    /// A failed probe forces demo mode with status "Backend Offline". If demo
    /// mode was switched on while the probe was in flight, its result is
    /// dropped.
    #[instrument(skip(self))]
    pub async fn probe_connectivity(&self) -> Option<ConnectivityStatus> {
        {
            let mut s = self.session.write().await;
            if s.query.is_demo_mode {
                s.status = STATUS_DEMO.to_string();
                settle(&mut s);
                debug!("demo mode active, probe skipped");
                return None;
            }
            if s.phase != Phase::Searching {
                s.phase = Phase::Probing;
            }
        }

        let report = probe(self.collector.as_ref()).await;

        let mut s = self.session.write().await;
        if s.query.is_demo_mode {
            debug!(online = report.online, "demo mode enabled during probe, result ignored");
            s.status = STATUS_DEMO.to_string();
        } else if report.online {
            s.status = if report.message.trim().is_empty() {
                STATUS_CONNECTED.to_string()
            } else {
                report.message.clone()
            };
        } else {
            warn!(endpoint = %report.endpoint, reason = %report.message, "collector offline, switching to demo mode");
            s.query.is_demo_mode = true;
            s.status = STATUS_OFFLINE.to_string();
        }
        settle(&mut s);
        Some(report)
    }

    /// Flips the sticky demo flag and returns its new value.
    ///
    /// Switching demo mode off probes the collector again, which turns demo
    /// mode straight back on if the collector is still unreachable.
    #[instrument(skip(self))]
    pub async fn toggle_demo_mode(&self) -> bool {
        let now_demo = {
            let mut s = self.session.write().await;
            s.query.is_demo_mode = !s.query.is_demo_mode;
            s.status = if s.query.is_demo_mode {
                STATUS_DEMO.to_string()
            } else {
                STATUS_DISCONNECTED.to_string()
            };
            settle(&mut s);
            s.query.is_demo_mode
        };
        info!(is_demo_mode = now_demo, "demo mode toggled");

        if now_demo {
            return true;
        }
        self.probe_connectivity().await;
        self.session.read().await.query.is_demo_mode
    }

    // ---------------------------------------------------------------------
    // Search
    // ---------------------------------------------------------------------

    /// Runs one search to completion.
    ///
    /// `error` and `results` are cleared and `is_loading` set before any
    /// work happens. Demo mode synthesizes records after the configured
    /// delay and never touches the network; live mode triggers a scrape,
    /// fetches every stored record and keeps those matching `query`.
    pub async fn search(&self, query: &str) -> SearchOutcome {
        let ticket = self.begin(query).await;
        self.run(ticket).await
    }

    /// Starts a search in the background.
    ///
    /// The state reset happens before this returns, so a reader sees the
    /// loading state immediately. Also returns whether the search runs on
    /// demo data, as decided when it started.
    pub async fn spawn_search(self: &Arc<Self>, query: &str) -> (JoinHandle<SearchOutcome>, bool) {
        let ticket = self.begin(query).await;
        let demo = ticket.demo;
        let this = Arc::clone(self);
        (tokio::spawn(async move { this.run(ticket).await }), demo)
    }

    /// Replays a query taken from the page address (`?q=`).
    ///
    /// Fires only when `q` is non-blank, nothing is loading, no results are
    /// shown and this exact query has not been replayed before. The check and
    /// the state reset happen under one lock, so concurrent callers start at
    /// most one search.
    pub async fn apply_query_on_load(&self, q: Option<&str>) -> Option<SearchOutcome> {
        let ticket = self.begin_replay(q).await?;
        Some(self.run(ticket).await)
    }

    /// Background variant of [`Self::apply_query_on_load`]; returns whether a
    /// search was started.
    pub async fn spawn_replay(self: &Arc<Self>, q: Option<&str>) -> bool {
        let Some(ticket) = self.begin_replay(q).await else {
            return false;
        };
        let this = Arc::clone(self);
        tokio::spawn(async move { this.run(ticket).await });
        true
    }

    async fn begin(&self, query: &str) -> SearchTicket {
        let mut s = self.session.write().await;
        start_search(&mut s, query)
    }

    async fn begin_replay(&self, q: Option<&str>) -> Option<SearchTicket> {
        let q = q.map(str::trim).filter(|q| !q.is_empty())?;

        let mut s = self.session.write().await;
        if s.query.is_loading || !s.query.results.is_empty() || s.replayed.as_deref() == Some(q) {
            debug!(query = q, "on-load replay skipped");
            return None;
        }
        s.replayed = Some(q.to_string());
        Some(start_search(&mut s, q))
    }

    #[instrument(skip(self, ticket), fields(query = %ticket.query, generation = ticket.generation, demo = ticket.demo))]
    async fn run(&self, ticket: SearchTicket) -> SearchOutcome {
        let result = if ticket.demo {
            let records = synthesize(&ticket.query);
            tokio::time::sleep(self.cfg.demo_delay).await;
            Ok(records)
        } else {
            self.fetch_live(&ticket.query).await
        };
        self.publish(&ticket, result).await
    }

    async fn fetch_live(&self, query: &str) -> Result<Vec<ReviewRecord>, SearchError> {
        let receipt = self.collector.trigger_scrape(query).await?;
        debug!(items_added = ?receipt.items_added, "scrape accepted");

        let all = self.collector.fetch_all().await?;
        let relevant = filter_relevant(&all, query);
        debug!(fetched = all.len(), relevant = relevant.len(), "records filtered");
        Ok(relevant)
    }

    async fn publish(
        &self,
        ticket: &SearchTicket,
        result: Result<Vec<ReviewRecord>, SearchError>,
    ) -> SearchOutcome {
        let mut s = self.session.write().await;
        if s.generation != ticket.generation {
            debug!(current = s.generation, "result superseded, discarded");
            return SearchOutcome::Superseded;
        }

        s.query.is_loading = false;
        s.phase = s.resting_phase();
        match result {
            Ok(records) => {
                let count = records.len();
                s.query.results = records;
                info!(count, "search completed");
                SearchOutcome::Completed { count }
            }
            Err(err) => {
                let message = err.to_string();
                warn!(error = %message, "search failed");
                s.query.error = Some(message.clone());
                SearchOutcome::Failed { message }
            }
        }
    }

    // ---------------------------------------------------------------------
    // Reads
    // ---------------------------------------------------------------------

    pub async fn snapshot(&self) -> QueryState {
        self.session.read().await.query.clone()
    }

    /// Aggregates for the currently published results.
    pub async fn dashboard(&self) -> DashboardView {
        DashboardView::build(&self.session.read().await.query.results)
    }

    pub async fn status(&self) -> String {
        self.session.read().await.status.clone()
    }

    pub async fn phase(&self) -> Phase {
        self.session.read().await.phase
    }

    pub async fn session_view(&self) -> SessionView {
        self.session.read().await.view()
    }

    /// Session and its aggregates, read under one lock.
    pub async fn dashboard_view(&self) -> (SessionView, DashboardView) {
        let s = self.session.read().await;
        (s.view(), DashboardView::build(&s.query.results))
    }
}

/// Resets the query state and claims a new generation.
fn start_search(s: &mut Session, query: &str) -> SearchTicket {
    s.generation += 1;
    s.query.query = query.to_string();
    s.query.error = None;
    s.query.results.clear();
    s.query.is_loading = true;
    s.phase = Phase::Searching;

    info!(query, generation = s.generation, demo = s.query.is_demo_mode, "search started");
    SearchTicket {
        generation: s.generation,
        query: query.to_string(),
        demo: s.query.is_demo_mode,
    }
}

/// Moves to the resting phase unless a search is in flight.
fn settle(s: &mut Session) {
    if !s.query.is_loading {
        s.phase = s.resting_phase();
    }
}
