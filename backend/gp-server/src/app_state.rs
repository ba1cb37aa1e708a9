use crate::SprintService;

use gp_github::GithubClient;

/// Shared application state for REST handlers
#[derive(Clone)]
pub struct AppState {
    pub sprints: SprintService,
    /// None when the GitHub relay is disabled
    pub github: Option<GithubClient>,
}
