use axum::Router;

pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Takes a reference to AppState and initializes all services; each domain
/// router applies its own state, so the returned router is stateless.
pub fn routes(state: &crate::state::AppState) -> Router {
    let statuses = {
        let repository = domain_statuses::PgStatusRepository::new(state.db.clone());
        let service = domain_statuses::StatusService::new(repository);
        domain_statuses::handlers::router(service)
    };

    let tasks = {
        let repository = domain_tasks::PgTaskRepository::new(state.db.clone());
        let service = domain_tasks::TaskService::new(repository);
        domain_tasks::handlers::router(service)
    };

    Router::new()
        .nest("/statuses", statuses)
        .nest("/tasks", tasks)
}

/// Creates a router with the /ready endpoint that performs actual health
/// checks against the database.
///
/// This router has state applied and can be merged with the stateless app
/// router from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
