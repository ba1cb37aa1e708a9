use gp_core::Sprint;
use gp_db::{DbError, Result as DbErrorResult, SprintStore};

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

/// In-process store; `fail` makes every call return a storage error.
#[derive(Default)]
pub(crate) struct MockStore {
    rows: Mutex<Vec<Sprint>>,
    last_window: Mutex<Option<(i64, i64)>>,
    fail: AtomicBool,
}

impl MockStore {
    pub(crate) fn failing() -> Self {
        let store = Self::default();
        store.fail.store(true, Ordering::SeqCst);
        store
    }

    pub(crate) fn last_window(&self) -> Option<(i64, i64)> {
        *self.last_window.lock().unwrap()
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> DbErrorResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DbError::from(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl SprintStore for MockStore {
    async fn insert(&self, sprint: &Sprint) -> DbErrorResult<i64> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let id = rows.last().map_or(1, |s| s.id + 1);
        rows.push(sprint.clone().with_id(id));
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Sprint>> {
        self.check()?;
        Ok(self.rows.lock().unwrap().iter().find(|s| s.id == id).cloned())
    }

    async fn update(&self, sprint: &Sprint) -> DbErrorResult<u64> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|s| s.id == sprint.id) {
            Some(row) => {
                *row = sprint.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> DbErrorResult<u64> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|s| s.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn list(&self, offset: i64, limit: i64) -> DbErrorResult<Vec<Sprint>> {
        self.check()?;
        *self.last_window.lock().unwrap() = Some((offset, limit));
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> DbErrorResult<()> {
        self.check()
    }
}
