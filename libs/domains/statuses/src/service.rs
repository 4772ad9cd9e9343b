use std::sync::Arc;
use tracing::instrument;

use crate::error::StatusResult;
use crate::models::{Status, StatusDto, UpdateStatus};
use crate::repository::StatusRepository;

/// Service layer for Status business rules.
///
/// Owns the id-match-on-update and existence checks; talks to the store
/// only through the injected repository handle and hands DTOs outward.
/// Input shape validation happens at the API boundary before a DTO
/// reaches this layer.
#[derive(Clone)]
pub struct StatusService<R: StatusRepository> {
    repository: Arc<R>,
}

impl<R: StatusRepository> StatusService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All statuses as DTOs; an empty store is a normal, empty result
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> StatusResult<Vec<StatusDto>> {
        let statuses = self.repository.find_all().await?;

        if !statuses.is_empty() {
            tracing::info!(count = statuses.len(), "Statuses retrieved");
        }

        Ok(statuses.into_iter().map(StatusDto::from).collect())
    }

    /// Fetch one status; `None` when the id is unknown (the caller decides
    /// how to surface that)
    #[instrument(skip(self), fields(status_id = %id))]
    pub async fn get_by_id(&self, id: i32) -> StatusResult<Option<StatusDto>> {
        let status = self.repository.find_by_id(id).await?;
        Ok(status.map(StatusDto::from))
    }

    /// Create a status. Any client-supplied id is ignored; the store
    /// assigns one, present on the returned DTO.
    #[instrument(skip(self, dto), fields(status_name = %dto.name))]
    pub async fn create(&self, dto: StatusDto) -> StatusResult<StatusDto> {
        let entity = Status::from(dto);
        let created = self.repository.insert(entity).await?;

        tracing::info!(status_id = %created.id, "Status created");
        Ok(created.into())
    }

    /// Overwrite the name of an existing status.
    ///
    /// Returns `Ok(false)` both when the route and body ids disagree and
    /// when no such row exists; callers that need to tell the two apart
    /// must check the mismatch before calling. Nothing is written in
    /// either false case.
    #[instrument(skip(self, dto), fields(status_id = %id))]
    pub async fn update(&self, id: i32, dto: StatusDto) -> StatusResult<bool> {
        if id != dto.id {
            tracing::warn!(body_id = %dto.id, "Route id does not match status id");
            return Ok(false);
        }

        let updated = self
            .repository
            .update(id, UpdateStatus { name: dto.name })
            .await?;

        if updated.is_some() {
            tracing::info!("Status updated");
        }
        Ok(updated.is_some())
    }

    /// Delete a status; `Ok(false)` when it does not exist
    #[instrument(skip(self), fields(status_id = %id))]
    pub async fn delete(&self, id: i32) -> StatusResult<bool> {
        self.repository.delete(id).await
    }
}
