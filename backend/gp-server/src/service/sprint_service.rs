use crate::service::sprint_error::{Result as SprintResult, SprintError};

use gp_config::MissingRowPolicy;
use gp_core::{Sprint, SprintPage};
use gp_db::SprintStore;

use std::sync::Arc;

/// Sprint operations on top of an injected [`SprintStore`].
///
/// Holds no mutable state of its own; cloning shares the store.
#[derive(Clone)]
pub struct SprintService {
    store: Arc<dyn SprintStore>,
    missing_row: MissingRowPolicy,
}

impl SprintService {
    pub fn new(store: Arc<dyn SprintStore>, missing_row: MissingRowPolicy) -> Self {
        Self { store, missing_row }
    }

    pub fn missing_row(&self) -> MissingRowPolicy {
        self.missing_row
    }

    /// Persist `sprint` and return it with its generated id. Any id it
    /// already carries is ignored.
    pub async fn create(&self, sprint: Sprint) -> SprintResult<Sprint> {
        let id = self.store.insert(&sprint).await?;
        Ok(sprint.with_id(id))
    }

    pub async fn get(&self, id: i64) -> SprintResult<Sprint> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| SprintError::not_found(id))
    }

    /// Overwrite every field of sprint `id` and echo what was written.
    pub async fn update(&self, id: i64, sprint: Sprint) -> SprintResult<Sprint> {
        let sprint = sprint.with_id(id);
        let affected = self.store.update(&sprint).await?;
        self.check_missing_row(id, affected)?;
        Ok(sprint)
    }

    pub async fn delete(&self, id: i64) -> SprintResult<()> {
        let affected = self.store.delete(id).await?;
        self.check_missing_row(id, affected)
    }

    /// One page of sprints in creation order. The page is already clamped.
    pub async fn list(&self, page: SprintPage) -> SprintResult<Vec<Sprint>> {
        Ok(self.store.list(page.start(), page.count()).await?)
    }

    /// Datastore reachability, for health checks.
    pub async fn ping(&self) -> SprintResult<()> {
        Ok(self.store.ping().await?)
    }

    fn check_missing_row(&self, id: i64, affected: u64) -> SprintResult<()> {
        match (self.missing_row, affected) {
            (MissingRowPolicy::NotFound, 0) => Err(SprintError::not_found(id)),
            _ => Ok(()),
        }
    }
}
