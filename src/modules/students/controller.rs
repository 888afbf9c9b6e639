use axum::{Json, extract::State, http::StatusCode};

use schoolhouse_core::AppError;
use schoolhouse_models::{
    CreateStudentDto, ErrorResponse, MessageResponse, Student, StudentWithClassroom,
    UpdateStudentDto,
};

use crate::middleware::auth::{
    CanCreateStudent, CanDeleteStudent, CanGetStudent, CanListStudents, CanUpdateStudent,
};
use crate::state::AppState;
use crate::validator::{EntityId, ValidatedJson};

use super::service::StudentService;

#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created successfully", body = Student),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Forbidden - school admin only", body = ErrorResponse),
        (status = 404, description = "Classroom not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
pub async fn create_student(
    State(state): State<AppState>,
    _auth: CanCreateStudent,
    ValidatedJson(dto): ValidatedJson<CreateStudentDto>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let student = StudentService::create_student(&state, dto).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "All students with their classroom", body = Vec<StudentWithClassroom>),
        (status = 401, description = "No token provided", body = ErrorResponse)
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
pub async fn get_students(
    State(state): State<AppState>,
    _auth: CanListStudents,
) -> Result<Json<Vec<StudentWithClassroom>>, AppError> {
    let students = StudentService::get_all_students(&state).await?;
    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(
        ("id" = Uuid, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student with its classroom", body = StudentWithClassroom),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
pub async fn get_student(
    State(state): State<AppState>,
    _auth: CanGetStudent,
    EntityId(id): EntityId,
) -> Result<Json<StudentWithClassroom>, AppError> {
    let student = StudentService::get_student_by_id(&state, id).await?;
    Ok(Json(student))
}

#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(
        ("id" = Uuid, Path, description = "Student ID")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated successfully", body = Student),
        (status = 403, description = "Forbidden - school admin only", body = ErrorResponse),
        (status = 404, description = "Student or classroom not found", body = ErrorResponse)
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
pub async fn update_student(
    State(state): State<AppState>,
    _auth: CanUpdateStudent,
    EntityId(id): EntityId,
    ValidatedJson(dto): ValidatedJson<UpdateStudentDto>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::update_student(&state, id, dto).await?;
    Ok(Json(student))
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(
        ("id" = Uuid, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student deleted successfully", body = MessageResponse),
        (status = 403, description = "Forbidden - school admin only", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
pub async fn delete_student(
    State(state): State<AppState>,
    _auth: CanDeleteStudent,
    EntityId(id): EntityId,
) -> Result<Json<MessageResponse>, AppError> {
    StudentService::delete_student(&state, id).await?;
    Ok(Json(MessageResponse::new("Student deleted successfully")))
}
