use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Errors surfaced by the status service.
///
/// Not-found and id-mismatch are normal negative results (`None` / `false`),
/// not errors; the only failure category at this layer is the persistence
/// store. Store errors are never retried here.
#[derive(Debug, Error)]
pub enum StatusError {
    #[error("Database error: {0}")]
    Database(String),
}

pub type StatusResult<T> = Result<T, StatusError>;

impl From<sea_orm::DbErr> for StatusError {
    fn from(err: sea_orm::DbErr) -> Self {
        StatusError::Database(err.to_string())
    }
}

/// Convert StatusError to AppError for standardized error responses.
///
/// The store detail ends up in the server-side log only; clients get the
/// generic 500 body.
impl From<StatusError> for AppError {
    fn from(err: StatusError) -> Self {
        match err {
            StatusError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for StatusError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
