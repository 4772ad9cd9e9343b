use sea_orm::entity::prelude::*;

/// Sea-ORM entity for the tasks table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub created_at: DateTimeWithTimeZone,
    pub due_date: DateTimeWithTimeZone,
    pub completed_at: Option<DateTimeWithTimeZone>,
    pub assigned_user_id: i32,
    pub status_id: i32,
    pub category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from the Sea-ORM row to the domain entity
impl From<Model> for crate::models::TaskItem {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            created_at: model.created_at.into(),
            due_date: model.due_date.into(),
            completed_at: model.completed_at.map(Into::into),
            assigned_user_id: model.assigned_user_id,
            status_id: model.status_id,
            category_id: model.category_id,
        }
    }
}
