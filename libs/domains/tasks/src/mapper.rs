//! Entity <-> DTO conversion for tasks.
//!
//! Pure structural copies in both directions; no business rules.

use crate::models::{TaskDto, TaskItem};

impl From<TaskItem> for TaskDto {
    fn from(entity: TaskItem) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            created_at: entity.created_at,
            due_date: entity.due_date,
            completed_at: entity.completed_at,
            assigned_user_id: entity.assigned_user_id,
            status_id: entity.status_id,
            category_id: entity.category_id,
        }
    }
}

impl From<TaskDto> for TaskItem {
    fn from(dto: TaskDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            created_at: dto.created_at,
            due_date: dto.due_date,
            completed_at: dto.completed_at,
            assigned_user_id: dto.assigned_user_id,
            status_id: dto.status_id,
            category_id: dto.category_id,
        }
    }
}
