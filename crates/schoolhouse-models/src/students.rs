//! Students. Each student references one classroom and, optionally, a school.
//!
//! The school reference is stored as given; it is not checked against the
//! classroom's school.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::classrooms::ClassroomSummary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub school_id: Option<Uuid>,
    pub classroom_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Student with its classroom populated as `{id, name}`.
///
/// `classroom` is `null` when the referenced classroom was deleted.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StudentWithClassroom {
    #[serde(flatten)]
    pub student: Student,
    pub classroom: Option<ClassroomSummary>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    #[schema(example = "John Doe")]
    pub name: String,
    #[validate(range(min = 0, max = 150, message = "age must be between 0 and 150"))]
    #[schema(example = 15)]
    pub age: i32,
    #[serde(rename = "school", default)]
    pub school_id: Option<Uuid>,
    /// ID of an existing classroom.
    #[serde(rename = "classroom")]
    pub classroom_id: Uuid,
}

/// Partial update; omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    #[validate(range(min = 0, max = 150, message = "age must be between 0 and 150"))]
    pub age: Option<i32>,
    #[serde(rename = "school")]
    pub school_id: Option<Uuid>,
    /// Moves the student to another existing classroom.
    #[serde(rename = "classroom")]
    pub classroom_id: Option<Uuid>,
}

/// Store input for a new student.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub age: i32,
    pub school_id: Option<Uuid>,
    pub classroom_id: Uuid,
}

impl From<CreateStudentDto> for NewStudent {
    fn from(dto: CreateStudentDto) -> Self {
        Self {
            name: dto.name,
            age: dto.age,
            school_id: dto.school_id,
            classroom_id: dto.classroom_id,
        }
    }
}
