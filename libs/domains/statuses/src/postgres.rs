use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder};

use crate::entity;
use crate::error::StatusResult;
use crate::models::{Status, UpdateStatus};
use crate::repository::StatusRepository;

/// PostgreSQL implementation of [`StatusRepository`] backed by SeaORM.
pub struct PgStatusRepository {
    db: DatabaseConnection,
}

impl PgStatusRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StatusRepository for PgStatusRepository {
    async fn find_all(&self) -> StatusResult<Vec<Status>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> StatusResult<Option<Status>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn insert(&self, status: Status) -> StatusResult<Status> {
        // The database assigns the id; whatever the entity carries is ignored
        let active_model = entity::ActiveModel {
            id: NotSet,
            name: Set(status.name),
        };

        let model = active_model.insert(&self.db).await?;

        tracing::info!(status_id = %model.id, "Created status");
        Ok(model.into())
    }

    async fn update(&self, id: i32, input: UpdateStatus) -> StatusResult<Option<Status>> {
        let Some(model) = entity::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active_model = model.into_active_model();
        active_model.name = Set(input.name);

        let updated = active_model.update(&self.db).await?;

        tracing::info!(status_id = %id, "Updated status");
        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: i32) -> StatusResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(status_id = %id, "Deleted status");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
