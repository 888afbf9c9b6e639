pub mod auth;
pub mod classrooms;
pub mod schools;
pub mod students;
