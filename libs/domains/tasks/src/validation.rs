//! Pure validation rules for task input.
//!
//! Each rule reports at most one violation per field; violations on
//! different fields accumulate through the `Validate` derive.

use chrono::{DateTime, Utc};
use std::borrow::Cow;
use validator::ValidationError;

/// Validate a task title: non-empty and at most 20 characters.
pub fn task_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::new("task_title_empty")
            .with_message(Cow::from("Title must not be empty.")));
    }

    if title.chars().count() > 20 {
        return Err(ValidationError::new("task_title_length")
            .with_message(Cow::from("Title must be at most 20 characters.")));
    }

    Ok(())
}

/// Validate a task description: non-empty and at most 200 characters.
pub fn task_description(description: &str) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(ValidationError::new("task_description_empty")
            .with_message(Cow::from("Description must not be empty.")));
    }

    if description.chars().count() > 200 {
        return Err(ValidationError::new("task_description_length")
            .with_message(Cow::from("Description must be at most 200 characters.")));
    }

    Ok(())
}

/// Validate that a due date lies strictly in the future (UTC).
pub fn future_due_date(due_date: &DateTime<Utc>) -> Result<(), ValidationError> {
    if *due_date <= Utc::now() {
        return Err(ValidationError::new("task_due_date_past")
            .with_message(Cow::from("Due date must be in the future (UTC).")));
    }

    Ok(())
}
