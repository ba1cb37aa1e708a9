use crate::{Result as DbErrorResult, SprintStore};

use gp_core::Sprint;

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// `sprints` table access over a shared SQLite pool.
#[derive(Clone)]
pub struct SprintRepository {
    pool: SqlitePool,
}

impl SprintRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn map_row(row: &SqliteRow) -> DbErrorResult<Sprint> {
        let start_date: Option<String> = row.try_get("start_date")?;
        let end_date: Option<String> = row.try_get("end_date")?;

        Ok(Sprint {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            start_date: start_date.unwrap_or_default(),
            end_date: end_date.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl SprintStore for SprintRepository {
    async fn insert(&self, sprint: &Sprint) -> DbErrorResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
                INSERT INTO sprints (name, start_date, end_date)
                VALUES (?, ?, ?)
                RETURNING id
            "#,
        )
        .bind(sprint.name.as_str())
        .bind(sprint.start_date_column())
        .bind(sprint.end_date_column())
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Sprint>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, start_date, end_date
                FROM sprints
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn update(&self, sprint: &Sprint) -> DbErrorResult<u64> {
        let result = sqlx::query(
            r#"
                UPDATE sprints
                SET name = ?, start_date = ?, end_date = ?
                WHERE id = ?
            "#,
        )
        .bind(sprint.name.as_str())
        .bind(sprint.start_date_column())
        .bind(sprint.end_date_column())
        .bind(sprint.id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM sprints WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn list(&self, offset: i64, limit: i64) -> DbErrorResult<Vec<Sprint>> {
        let rows = sqlx::query(
            r#"
                SELECT id, name, start_date, end_date
                FROM sprints
                ORDER BY id
                LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
