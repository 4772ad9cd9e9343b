use std::sync::Arc;
use tracing::instrument;

use crate::error::TaskResult;
use crate::models::{CreateTask, TaskDto, TaskItem, UpdateTask};
use crate::repository::TaskRepository;

/// Service layer for TaskItem business rules.
///
/// Same contract as the statuses service: the boundary validates shapes,
/// this layer owns the id-match and existence checks and speaks to the
/// store through the injected repository handle.
#[derive(Clone)]
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All tasks as DTOs; an empty store is a normal, empty result
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> TaskResult<Vec<TaskDto>> {
        let tasks = self.repository.find_all().await?;

        if !tasks.is_empty() {
            tracing::info!(count = tasks.len(), "Tasks retrieved");
        }

        Ok(tasks.into_iter().map(TaskDto::from).collect())
    }

    /// Fetch one task; `None` when the id is unknown
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn get_by_id(&self, id: i32) -> TaskResult<Option<TaskDto>> {
        let task = self.repository.find_by_id(id).await?;
        Ok(task.map(TaskDto::from))
    }

    /// Create a task: stamps the creation time, store assigns the id.
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create(&self, input: CreateTask) -> TaskResult<TaskDto> {
        let entity = TaskItem::new(input);
        let created = self.repository.insert(entity).await?;

        tracing::info!(task_id = %created.id, "Task created");
        Ok(created.into())
    }

    /// Overwrite an existing task (everything except id and created_at).
    ///
    /// Returns `Ok(false)` both on a route/body id mismatch and when the
    /// row does not exist; the API boundary disambiguates the mismatch
    /// before calling.
    #[instrument(skip(self, dto), fields(task_id = %id))]
    pub async fn update(&self, id: i32, dto: TaskDto) -> TaskResult<bool> {
        if id != dto.id {
            tracing::warn!(body_id = %dto.id, "Route id does not match task id");
            return Ok(false);
        }

        let input = UpdateTask {
            title: dto.title,
            description: dto.description,
            due_date: dto.due_date,
            completed_at: dto.completed_at,
            assigned_user_id: dto.assigned_user_id,
            status_id: dto.status_id,
            category_id: dto.category_id,
        };

        let updated = self.repository.update(id, input).await?;

        if updated.is_some() {
            tracing::info!("Task updated");
        }
        Ok(updated.is_some())
    }

    /// Delete a task; `Ok(false)` when it does not exist
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete(&self, id: i32) -> TaskResult<bool> {
        self.repository.delete(id).await
    }
}
