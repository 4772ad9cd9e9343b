use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AppError, ValidatedJson,
    errors::responses::{
        BadRequestResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::StatusDto;
use crate::repository::StatusRepository;
use crate::service::StatusService;

/// OpenAPI documentation for the Statuses API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_statuses,
        create_status,
        get_status,
        update_status,
        delete_status,
    ),
    components(
        schemas(StatusDto),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "statuses", description = "Status management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the statuses router with all HTTP endpoints
pub fn router<R: StatusRepository + 'static>(service: StatusService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_statuses).post(create_status))
        .route(
            "/{id}",
            get(get_status).put(update_status).delete(delete_status),
        )
        .with_state(shared_service)
}

/// List all statuses
#[utoipa::path(
    get,
    path = "",
    tag = "statuses",
    responses(
        (status = 200, description = "List of statuses (empty array when none exist)", body = Vec<StatusDto>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_statuses<R: StatusRepository>(
    State(service): State<Arc<StatusService<R>>>,
) -> Result<Json<Vec<StatusDto>>, AppError> {
    let statuses = service.get_all().await?;
    Ok(Json(statuses))
}

/// Get a status by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "statuses",
    params(
        ("id" = i32, Path, description = "Status id")
    ),
    responses(
        (status = 200, description = "Status found", body = StatusDto),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_status<R: StatusRepository>(
    State(service): State<Arc<StatusService<R>>>,
    Path(id): Path<i32>,
) -> Result<Json<StatusDto>, AppError> {
    match service.get_by_id(id).await? {
        Some(status) => Ok(Json(status)),
        None => Err(AppError::NotFound(format!(
            "Status with id {} not found.",
            id
        ))),
    }
}

/// Create a new status
#[utoipa::path(
    post,
    path = "",
    tag = "statuses",
    request_body = StatusDto,
    responses(
        (status = 201, description = "Status created successfully", body = StatusDto,
            headers(("Location" = String, description = "URL of the created status"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_status<R: StatusRepository>(
    State(service): State<Arc<StatusService<R>>>,
    ValidatedJson(dto): ValidatedJson<StatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let created = service.create(dto).await?;

    let location = [(
        header::LOCATION,
        format!("/api/statuses/{}", created.id),
    )];

    Ok((StatusCode::CREATED, location, Json(created)))
}

/// Update a status
///
/// The body id must match the route id; a mismatch is rejected before the
/// service is called, so a negative service result here is always
/// "no such row".
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "statuses",
    params(
        ("id" = i32, Path, description = "Status id")
    ),
    request_body = StatusDto,
    responses(
        (status = 204, description = "Status updated successfully"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_status<R: StatusRepository>(
    State(service): State<Arc<StatusService<R>>>,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<StatusDto>,
) -> Result<impl IntoResponse, AppError> {
    if id != dto.id {
        return Err(AppError::BadRequest(
            "Route id does not match status id.".to_string(),
        ));
    }

    if service.update(id, dto).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "Status with id {} does not exist.",
            id
        )))
    }
}

/// Delete a status
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "statuses",
    params(
        ("id" = i32, Path, description = "Status id")
    ),
    responses(
        (status = 204, description = "Status deleted successfully"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_status<R: StatusRepository>(
    State(service): State<Arc<StatusService<R>>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "Status with id {} not found.",
            id
        )))
    }
}
