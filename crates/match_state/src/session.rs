//! Drives the fetch / match / reset flow against a gateway.

use tracing::{debug, error};

use crate::dashboard::Dashboard;
use crate::gateway::MatchingGateway;
use crate::preferences::PreferenceCollector;

/// What a gateway round trip did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The response was stored; `rows` projects are now on display.
    Applied { rows: usize },
    /// The call failed, was logged, and state was left as it was.
    Failed,
}

impl SyncOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// One user session: the dashboard state, the preference form, and the
/// gateway used to refresh the project list.
///
/// Requests are not sequenced. Callers that overlap two submissions may
/// see the later-arriving response win regardless of send order.
pub struct Session<G> {
    gateway: G,
    dashboard: Dashboard,
    preferences: PreferenceCollector,
}

impl<G: MatchingGateway> Session<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_dashboard(gateway, Dashboard::default())
    }

    pub fn with_dashboard(gateway: G, dashboard: Dashboard) -> Self {
        Self {
            gateway,
            dashboard,
            preferences: PreferenceCollector::default(),
        }
    }

    /// Fetch every project and make it both the working and reset list.
    pub async fn load_projects(&mut self) -> SyncOutcome {
        match self.gateway.fetch_projects().await {
            Ok(projects) => {
                debug!(count = projects.len(), "fetched projects");
                self.dashboard.initialize_projects(projects);
                SyncOutcome::Applied {
                    rows: self.dashboard.rows().len(),
                }
            }
            Err(e) => {
                error!(error = %e, "failed to initialise projects");
                SyncOutcome::Failed
            }
        }
    }

    /// Send the collected preferences and show the matched projects.
    pub async fn submit_preferences(&mut self) -> SyncOutcome {
        let criteria = self.preferences.submission();
        match self.gateway.match_projects(&criteria).await {
            Ok(projects) => {
                debug!(count = projects.len(), "matched projects");
                self.dashboard.replace_projects(projects);
                SyncOutcome::Applied {
                    rows: self.dashboard.rows().len(),
                }
            }
            Err(e) => {
                error!(error = %e, "failed to submit preferences");
                SyncOutcome::Failed
            }
        }
    }

    /// Clear the form and go back to the last fetched projects.
    pub fn reset_preferences(&mut self) {
        self.preferences.clear();
        self.dashboard.reset_projects();
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut Dashboard {
        &mut self.dashboard
    }

    pub fn preferences(&self) -> &PreferenceCollector {
        &self.preferences
    }

    pub fn preferences_mut(&mut self) -> &mut PreferenceCollector {
        &mut self.preferences
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}
