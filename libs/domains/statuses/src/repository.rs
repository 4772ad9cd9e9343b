use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use crate::error::StatusResult;
use crate::models::{Status, UpdateStatus};

/// Repository trait for Status persistence
///
/// The store-handle capability: find, insert, update, delete, with
/// write-through persistence. Implementations can use different storage
/// backends (PostgreSQL, in-memory, ...).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// All statuses in insertion order; an empty store yields an empty vec
    async fn find_all(&self) -> StatusResult<Vec<Status>>;

    /// Find a status by primary key
    async fn find_by_id(&self, id: i32) -> StatusResult<Option<Status>>;

    /// Insert a status. The store assigns the identifier; whatever id the
    /// entity carries is ignored.
    async fn insert(&self, status: Status) -> StatusResult<Status>;

    /// Overwrite the mutable fields of an existing row.
    /// Returns `None` when no row with that id exists.
    async fn update(&self, id: i32, input: UpdateStatus) -> StatusResult<Option<Status>>;

    /// Delete by id; `false` when no row existed
    async fn delete(&self, id: i32) -> StatusResult<bool>;
}

/// In-memory implementation of StatusRepository (for development/testing)
///
/// Identifiers are handed out sequentially starting at 1, so id order is
/// insertion order.
#[derive(Debug, Clone)]
pub struct InMemoryStatusRepository {
    rows: Arc<RwLock<HashMap<i32, Status>>>,
    next_id: Arc<AtomicI32>,
}

impl InMemoryStatusRepository {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
        }
    }
}

impl Default for InMemoryStatusRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatusRepository for InMemoryStatusRepository {
    async fn find_all(&self) -> StatusResult<Vec<Status>> {
        let rows = self.rows.read().await;
        let mut result: Vec<Status> = rows.values().cloned().collect();
        result.sort_by_key(|s| s.id);
        Ok(result)
    }

    async fn find_by_id(&self, id: i32) -> StatusResult<Option<Status>> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).cloned())
    }

    async fn insert(&self, mut status: Status) -> StatusResult<Status> {
        let mut rows = self.rows.write().await;
        status.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        rows.insert(status.id, status.clone());

        tracing::info!(status_id = %status.id, "Created status");
        Ok(status)
    }

    async fn update(&self, id: i32, input: UpdateStatus) -> StatusResult<Option<Status>> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&id) {
            Some(row) => {
                row.name = input.name;
                tracing::info!(status_id = %id, "Updated status");
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> StatusResult<bool> {
        let mut rows = self.rows.write().await;
        if rows.remove(&id).is_some() {
            tracing::info!(status_id = %id, "Deleted status");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
