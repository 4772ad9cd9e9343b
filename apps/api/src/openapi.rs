//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Taskboard API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taskboard API",
        version = "0.1.0",
        description = "Task and status management API",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/statuses", api = domain_statuses::handlers::ApiDoc),
        (path = "/api/tasks", api = domain_tasks::handlers::ApiDoc)
    ),
    tags(
        (name = "statuses", description = "Status management endpoints"),
        (name = "tasks", description = "Task management endpoints")
    )
)]
pub struct ApiDoc;
