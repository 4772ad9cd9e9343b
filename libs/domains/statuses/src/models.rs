use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Status entity - the persisted record shape.
///
/// `id` is store-assigned: a freshly mapped entity carries 0 until the
/// repository inserts it, and it is immutable once persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub id: i32,
    pub name: String,
}

/// Wire shape for a status.
///
/// Clients may send any `id` on create; the store assigns identifiers and
/// the submitted value is ignored. On update the body id must match the
/// route id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct StatusDto {
    /// Store-assigned identifier (0 until persisted)
    #[serde(default)]
    #[schema(example = 1)]
    pub id: i32,
    /// Display name, 2-50 characters, not blank
    #[validate(custom(function = "crate::validation::status_name"))]
    #[schema(example = "In Progress")]
    pub name: String,
}

/// Repository input for updates.
///
/// Carries only the mutable field, so an update can never touch the
/// identifier.
#[derive(Debug, Clone)]
pub struct UpdateStatus {
    pub name: String,
}
