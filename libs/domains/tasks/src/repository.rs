use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use crate::error::TaskResult;
use crate::models::{TaskItem, UpdateTask};

/// Repository trait for TaskItem persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// All tasks in insertion order; an empty store yields an empty vec
    async fn find_all(&self) -> TaskResult<Vec<TaskItem>>;

    /// Find a task by primary key
    async fn find_by_id(&self, id: i32) -> TaskResult<Option<TaskItem>>;

    /// Insert a task. The store assigns the identifier; whatever id the
    /// entity carries is ignored.
    async fn insert(&self, task: TaskItem) -> TaskResult<TaskItem>;

    /// Overwrite the mutable fields of an existing row.
    /// Returns `None` when no row with that id exists.
    async fn update(&self, id: i32, input: UpdateTask) -> TaskResult<Option<TaskItem>>;

    /// Delete by id; `false` when no row existed
    async fn delete(&self, id: i32) -> TaskResult<bool>;
}

/// In-memory implementation of TaskRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository {
    rows: Arc<RwLock<HashMap<i32, TaskItem>>>,
    next_id: Arc<AtomicI32>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
        }
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_all(&self) -> TaskResult<Vec<TaskItem>> {
        let rows = self.rows.read().await;
        let mut result: Vec<TaskItem> = rows.values().cloned().collect();
        result.sort_by_key(|t| t.id);
        Ok(result)
    }

    async fn find_by_id(&self, id: i32) -> TaskResult<Option<TaskItem>> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).cloned())
    }

    async fn insert(&self, mut task: TaskItem) -> TaskResult<TaskItem> {
        let mut rows = self.rows.write().await;
        task.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        rows.insert(task.id, task.clone());

        tracing::info!(task_id = %task.id, "Created task");
        Ok(task)
    }

    async fn update(&self, id: i32, input: UpdateTask) -> TaskResult<Option<TaskItem>> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&id) {
            Some(row) => {
                row.title = input.title;
                row.description = input.description;
                row.due_date = input.due_date;
                row.completed_at = input.completed_at;
                row.assigned_user_id = input.assigned_user_id;
                row.status_id = input.status_id;
                row.category_id = input.category_id;

                tracing::info!(task_id = %id, "Updated task");
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> TaskResult<bool> {
        let mut rows = self.rows.write().await;
        if rows.remove(&id).is_some() {
            tracing::info!(task_id = %id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateTask;
    use chrono::{Duration, Utc};

    fn task(title: &str) -> TaskItem {
        TaskItem::new(CreateTask {
            title: title.to_string(),
            description: "Something worth doing".to_string(),
            due_date: Utc::now() + Duration::days(1),
            assigned_user_id: 1,
            status_id: 1,
            category_id: 2,
        })
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let repo = InMemoryTaskRepository::new();

        let first = repo.insert(task("First")).await.unwrap();
        let second = repo.insert(task("Second")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn update_preserves_id_and_created_at() {
        let repo = InMemoryTaskRepository::new();
        let created = repo.insert(task("Original")).await.unwrap();

        let updated = repo
            .update(
                created.id,
                UpdateTask {
                    title: "Renamed".to_string(),
                    description: created.description.clone(),
                    due_date: created.due_date,
                    completed_at: Some(Utc::now()),
                    assigned_user_id: 9,
                    status_id: 5,
                    category_id: created.category_id,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.status_id, 5);
        assert!(updated.completed_at.is_some());
    }

    #[tokio::test]
    async fn delete_then_find_reports_absence() {
        let repo = InMemoryTaskRepository::new();
        let created = repo.insert(task("Short-lived")).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
        assert!(!repo.delete(created.id).await.unwrap());
    }
}
