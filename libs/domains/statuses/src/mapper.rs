//! Entity <-> DTO conversion.
//!
//! The only place allowed to translate between the persisted shape and the
//! wire shape. Both directions are total structural copies of (id, name);
//! no business rules live here.

use crate::models::{Status, StatusDto};

impl From<Status> for StatusDto {
    fn from(entity: Status) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

impl From<StatusDto> for Status {
    fn from(dto: StatusDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}
