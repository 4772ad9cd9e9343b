use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder};

use crate::entity;
use crate::error::TaskResult;
use crate::models::{TaskItem, UpdateTask};
use crate::repository::TaskRepository;

/// PostgreSQL implementation of [`TaskRepository`] backed by SeaORM.
pub struct PgTaskRepository {
    db: DatabaseConnection,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn find_all(&self) -> TaskResult<Vec<TaskItem>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> TaskResult<Option<TaskItem>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn insert(&self, task: TaskItem) -> TaskResult<TaskItem> {
        // The database assigns the id; whatever the entity carries is ignored
        let active_model = entity::ActiveModel {
            id: NotSet,
            title: Set(task.title),
            description: Set(task.description),
            created_at: Set(task.created_at.into()),
            due_date: Set(task.due_date.into()),
            completed_at: Set(task.completed_at.map(Into::into)),
            assigned_user_id: Set(task.assigned_user_id),
            status_id: Set(task.status_id),
            category_id: Set(task.category_id),
        };

        let model = active_model.insert(&self.db).await?;

        tracing::info!(task_id = %model.id, "Created task");
        Ok(model.into())
    }

    async fn update(&self, id: i32, input: UpdateTask) -> TaskResult<Option<TaskItem>> {
        let Some(model) = entity::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        // id and created_at stay untouched
        let mut active_model = model.into_active_model();
        active_model.title = Set(input.title);
        active_model.description = Set(input.description);
        active_model.due_date = Set(input.due_date.into());
        active_model.completed_at = Set(input.completed_at.map(Into::into));
        active_model.assigned_user_id = Set(input.assigned_user_id);
        active_model.status_id = Set(input.status_id);
        active_model.category_id = Set(input.category_id);

        let updated = active_model.update(&self.db).await?;

        tracing::info!(task_id = %id, "Updated task");
        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: i32) -> TaskResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(task_id = %id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
