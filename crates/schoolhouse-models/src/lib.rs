//! # Schoolhouse Models
//!
//! Entities, request DTOs and response projections for the Schoolhouse API.
//!
//! # Modules
//!
//! - [`auth`]: registration and login payloads
//! - [`users`]: the user entity
//! - [`schools`]: schools and their `{id, name}` projection
//! - [`classrooms`]: classrooms, which reference a school
//! - [`students`]: students, which reference a classroom
//! - [`common`]: shared response bodies
//!
//! Request DTOs name references the way clients send them (`school`,
//! `classroom`); entities expose them as `school_id` / `classroom_id`.

pub mod auth;
pub mod classrooms;
pub mod common;
pub mod schools;
pub mod students;
pub mod users;

pub use auth::{LoginRequest, LoginResponse, RegisterRequestDto};
pub use classrooms::{
    Classroom, ClassroomSummary, ClassroomWithSchool, CreateClassroomDto, NewClassroom,
    UpdateClassroomDto,
};
pub use common::{ErrorResponse, MessageResponse};
pub use schools::{CreateSchoolDto, NewSchool, School, SchoolSummary, UpdateSchoolDto};
pub use students::{
    CreateStudentDto, NewStudent, Student, StudentWithClassroom, UpdateStudentDto,
};
pub use users::{NewUser, User};
