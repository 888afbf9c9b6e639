//! Classrooms. Each classroom references one school.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::schools::SchoolSummary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Classroom {
    pub id: Uuid,
    pub name: String,
    pub capacity: i32,
    pub school_id: Uuid,
    /// The school admin who created the classroom.
    pub school_admin_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Classroom with its school populated as `{id, name}`.
///
/// `school` is `null` when the referenced school no longer exists.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClassroomWithSchool {
    #[serde(flatten)]
    pub classroom: Classroom,
    pub school: Option<SchoolSummary>,
}

/// `{id, name}` projection used when a student's classroom is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClassroomSummary {
    pub id: Uuid,
    pub name: String,
}

impl From<&Classroom> for ClassroomSummary {
    fn from(classroom: &Classroom) -> Self {
        Self {
            id: classroom.id,
            name: classroom.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateClassroomDto {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    #[schema(example = "Math Class")]
    pub name: String,
    #[validate(range(min = 1, message = "capacity must be at least 1"))]
    #[schema(example = 30)]
    pub capacity: i32,
    /// ID of an existing school.
    #[serde(rename = "school")]
    pub school_id: Uuid,
}

/// Partial update; omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateClassroomDto {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    #[validate(range(min = 1, message = "capacity must be at least 1"))]
    pub capacity: Option<i32>,
    /// Moves the classroom to another existing school.
    #[serde(rename = "school")]
    pub school_id: Option<Uuid>,
}

/// Store input for a new classroom.
#[derive(Debug, Clone)]
pub struct NewClassroom {
    pub name: String,
    pub capacity: i32,
    pub school_id: Uuid,
    pub school_admin_id: Uuid,
}

impl NewClassroom {
    pub fn from_dto(dto: CreateClassroomDto, school_admin_id: Uuid) -> Self {
        Self {
            name: dto.name,
            capacity: dto.capacity,
            school_id: dto.school_id,
            school_admin_id,
        }
    }
}
