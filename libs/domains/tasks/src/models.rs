use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Backlog is the workflow entry point for new tasks
pub const DEFAULT_STATUS_ID: i32 = 1;

/// TaskItem entity - the persisted record shape.
///
/// `id` is store-assigned and `created_at` is stamped once at creation;
/// everything else is overwritten wholesale by updates.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskItem {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub assigned_user_id: i32,
    pub status_id: i32,
    pub category_id: i32,
}

impl TaskItem {
    /// Build a fresh, unpersisted entity from a create request.
    pub fn new(input: CreateTask) -> Self {
        Self {
            id: 0,
            title: input.title,
            description: input.description,
            created_at: Utc::now(),
            due_date: input.due_date,
            completed_at: None,
            assigned_user_id: input.assigned_user_id,
            status_id: input.status_id,
            category_id: input.category_id,
        }
    }
}

/// Wire shape for a task, used for responses and full-body updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct TaskDto {
    /// Store-assigned identifier (0 until persisted)
    #[serde(default)]
    pub id: i32,
    /// Short title, at most 20 characters
    #[validate(custom(function = "crate::validation::task_title"))]
    #[schema(example = "Renew passport")]
    pub title: String,
    /// Free-form description, at most 200 characters
    #[validate(custom(function = "crate::validation::task_description"))]
    pub description: String,
    /// Stamped by the store at creation; immutable afterwards
    pub created_at: DateTime<Utc>,
    /// Must lie in the future (UTC)
    #[validate(custom(function = "crate::validation::future_due_date"))]
    pub due_date: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub assigned_user_id: i32,
    pub status_id: i32,
    /// Referenced category; must be selected
    #[validate(range(min = 1, message = "Category must be selected."))]
    pub category_id: i32,
}

/// DTO for creating a new task
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTask {
    #[validate(custom(function = "crate::validation::task_title"))]
    #[schema(example = "Renew passport")]
    pub title: String,
    #[validate(custom(function = "crate::validation::task_description"))]
    pub description: String,
    #[validate(custom(function = "crate::validation::future_due_date"))]
    pub due_date: DateTime<Utc>,
    pub assigned_user_id: i32,
    /// Workflow status; defaults to Backlog
    #[serde(default = "default_status_id")]
    pub status_id: i32,
    #[validate(range(min = 1, message = "Category must be selected."))]
    pub category_id: i32,
}

fn default_status_id() -> i32 {
    DEFAULT_STATUS_ID
}

/// Repository input for updates.
///
/// Everything except the identifier and the creation timestamp, so those
/// two can never be overwritten.
#[derive(Debug, Clone)]
pub struct UpdateTask {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub assigned_user_id: i32,
    pub status_id: i32,
    pub category_id: i32,
}
