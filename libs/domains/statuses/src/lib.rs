//! Statuses Domain
//!
//! This module provides a complete domain implementation for managing
//! task statuses.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business rules (id match, existence)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTO, mapper
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_statuses::{InMemoryStatusRepository, StatusService, handlers};
//!
//! // Create repository and service
//! let repository = InMemoryStatusRepository::new();
//! let service = StatusService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod validation;

mod entity;

// Re-export commonly used types
pub use error::{StatusError, StatusResult};
pub use models::{Status, StatusDto, UpdateStatus};
pub use postgres::PgStatusRepository;
pub use repository::{InMemoryStatusRepository, StatusRepository};
pub use service::StatusService;
