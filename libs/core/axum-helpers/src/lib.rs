//! # Axum Helpers
//!
//! A collection of utilities, middleware, and helpers for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured error responses shared by every domain
//! - **[`extractors`]**: Custom extractors (validated JSON)
//! - **[`middleware`]**: HTTP middleware (security headers)
//! - **[`server`]**: Server setup, health checks, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod server;

// Re-export error types
pub use errors::{AppError, ErrorResponse, validation_error_map};

// Re-export extractors
pub use extractors::ValidatedJson;

// Re-export HTTP middleware
pub use middleware::security_headers;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_app, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};
