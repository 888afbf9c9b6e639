//! Roles and the role gate.
//!
//! The role set is closed: every token carries exactly one [`Role`]. Each
//! protected endpoint maps to an [`Operation`], and every operation declares
//! a fixed allow-list of roles in [`Operation::allowed_roles`]. The gate
//! only checks membership; it does not look at which school a resource
//! belongs to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use schoolhouse_core::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Role {
    #[serde(rename = "superadmin")]
    SuperAdmin,
    #[serde(rename = "school-admin")]
    SchoolAdmin,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::SuperAdmin, Role::SchoolAdmin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "superadmin",
            Role::SchoolAdmin => "school-admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "superadmin" => Ok(Role::SuperAdmin),
            "school-admin" => Ok(Role::SchoolAdmin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Every role-gated action exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateSchool,
    UpdateSchool,
    DeleteSchool,
    CreateClassroom,
    ListClassrooms,
    GetClassroom,
    UpdateClassroom,
    DeleteClassroom,
    CreateStudent,
    ListStudents,
    GetStudent,
    UpdateStudent,
    DeleteStudent,
}

const SUPERADMIN_ONLY: &[Role] = &[Role::SuperAdmin];
const SCHOOL_ADMIN_ONLY: &[Role] = &[Role::SchoolAdmin];
const ANY_ADMIN: &[Role] = &[Role::SuperAdmin, Role::SchoolAdmin];

impl Operation {
    pub fn allowed_roles(self) -> &'static [Role] {
        match self {
            Operation::CreateSchool | Operation::UpdateSchool | Operation::DeleteSchool => {
                SUPERADMIN_ONLY
            }
            Operation::CreateClassroom
            | Operation::UpdateClassroom
            | Operation::DeleteClassroom
            | Operation::CreateStudent
            | Operation::UpdateStudent
            | Operation::DeleteStudent => SCHOOL_ADMIN_ONLY,
            Operation::ListClassrooms
            | Operation::GetClassroom
            | Operation::ListStudents
            | Operation::GetStudent => ANY_ADMIN,
        }
    }

    pub fn permits(self, role: Role) -> bool {
        self.allowed_roles().contains(&role)
    }
}

/// Permits `role` iff it is on the allow-list for `operation`.
pub fn authorize(role: Role, operation: Operation) -> Result<(), AppError> {
    if operation.permits(role) {
        return Ok(());
    }

    let required = operation
        .allowed_roles()
        .iter()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    Err(AppError::forbidden(format!(
        "Access denied. Required roles: [{}], but user has role: {}",
        required, role
    )))
}
