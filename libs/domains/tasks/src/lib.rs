//! Tasks Domain
//!
//! This module provides a complete domain implementation for managing
//! task items: titled pieces of work with a due date, a category, an
//! assigned user and a workflow status.
//!
//! The layering mirrors the statuses domain: handlers → service →
//! repository → models, with the repository trait hiding the storage
//! backend.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{InMemoryTaskRepository, TaskService, handlers};
//!
//! let repository = InMemoryTaskRepository::new();
//! let service = TaskService::new(repository);
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
pub use error::{TaskError, TaskResult};
pub use models::{CreateTask, TaskDto, TaskItem, UpdateTask};
pub use postgres::PgTaskRepository;
pub use repository::{InMemoryTaskRepository, TaskRepository};
pub use service::TaskService;
