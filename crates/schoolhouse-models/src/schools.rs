//! Schools.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct School {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    /// The superadmin who created the school. Never changes.
    pub superadmin_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// `{id, name}` projection used when a classroom's school is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SchoolSummary {
    pub id: Uuid,
    pub name: String,
}

impl From<&School> for SchoolSummary {
    fn from(school: &School) -> Self {
        Self {
            id: school.id,
            name: school.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSchoolDto {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    #[schema(example = "Test School")]
    pub name: String,
    #[validate(length(min = 1, max = 500, message = "address must be between 1 and 500 characters"))]
    #[schema(example = "123 Street")]
    pub address: String,
}

/// Partial update; omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateSchoolDto {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 500, message = "address must be between 1 and 500 characters"))]
    pub address: Option<String>,
}

/// Store input for a new school.
#[derive(Debug, Clone)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub superadmin_id: Uuid,
}

impl NewSchool {
    pub fn from_dto(dto: CreateSchoolDto, superadmin_id: Uuid) -> Self {
        Self {
            name: dto.name,
            address: dto.address,
            superadmin_id,
        }
    }
}
