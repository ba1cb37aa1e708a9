use crate::Result as DbErrorResult;

use gp_core::Sprint;

use async_trait::async_trait;

/// Storage seam for sprints.
///
/// Each method is a single statement against the datastore; nothing spans
/// more than one call. `update` and `delete` report how many rows they
/// touched and succeed when that number is zero.
#[async_trait]
pub trait SprintStore: Send + Sync {
    /// Insert a row and return the generated id. `sprint.id` is ignored.
    async fn insert(&self, sprint: &Sprint) -> DbErrorResult<i64>;

    /// `Ok(None)` when no row has this id.
    async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Sprint>>;

    /// Overwrite every mutable column of the row `sprint.id`.
    async fn update(&self, sprint: &Sprint) -> DbErrorResult<u64>;

    async fn delete(&self, id: i64) -> DbErrorResult<u64>;

    /// Rows in insertion order, skipping `offset`, at most `limit`.
    async fn list(&self, offset: i64, limit: i64) -> DbErrorResult<Vec<Sprint>>;

    /// Round trip to the datastore, used by health checks.
    async fn ping(&self) -> DbErrorResult<()>;
}
