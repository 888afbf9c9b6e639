use axum::{Json, extract::State, http::StatusCode};

use schoolhouse_core::AppError;
use schoolhouse_models::{
    Classroom, ClassroomWithSchool, CreateClassroomDto, ErrorResponse, MessageResponse,
    UpdateClassroomDto,
};

use crate::middleware::auth::{
    CanCreateClassroom, CanDeleteClassroom, CanGetClassroom, CanListClassrooms,
    CanUpdateClassroom,
};
use crate::state::AppState;
use crate::validator::{EntityId, ValidatedJson};

use super::service::ClassroomService;

#[utoipa::path(
    post,
    path = "/api/classrooms",
    request_body = CreateClassroomDto,
    responses(
        (status = 201, description = "Classroom created successfully", body = Classroom),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Forbidden - school admin only", body = ErrorResponse),
        (status = 404, description = "School not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Classrooms",
    security(("bearer_auth" = []))
)]
pub async fn create_classroom(
    State(state): State<AppState>,
    CanCreateClassroom(auth_user): CanCreateClassroom,
    ValidatedJson(dto): ValidatedJson<CreateClassroomDto>,
) -> Result<(StatusCode, Json<Classroom>), AppError> {
    let classroom =
        ClassroomService::create_classroom(&state, auth_user.user_id()?, dto).await?;
    Ok((StatusCode::CREATED, Json(classroom)))
}

#[utoipa::path(
    get,
    path = "/api/classrooms",
    responses(
        (status = 200, description = "All classrooms with their school", body = Vec<ClassroomWithSchool>),
        (status = 401, description = "No token provided", body = ErrorResponse)
    ),
    tag = "Classrooms",
    security(("bearer_auth" = []))
)]
pub async fn get_classrooms(
    State(state): State<AppState>,
    _auth: CanListClassrooms,
) -> Result<Json<Vec<ClassroomWithSchool>>, AppError> {
    let classrooms = ClassroomService::get_all_classrooms(&state).await?;
    Ok(Json(classrooms))
}

#[utoipa::path(
    get,
    path = "/api/classrooms/{id}",
    params(
        ("id" = Uuid, Path, description = "Classroom ID")
    ),
    responses(
        (status = 200, description = "Classroom with its school", body = ClassroomWithSchool),
        (status = 404, description = "Classroom not found", body = ErrorResponse)
    ),
    tag = "Classrooms",
    security(("bearer_auth" = []))
)]
pub async fn get_classroom(
    State(state): State<AppState>,
    _auth: CanGetClassroom,
    EntityId(id): EntityId,
) -> Result<Json<ClassroomWithSchool>, AppError> {
    let classroom = ClassroomService::get_classroom_by_id(&state, id).await?;
    Ok(Json(classroom))
}

#[utoipa::path(
    put,
    path = "/api/classrooms/{id}",
    params(
        ("id" = Uuid, Path, description = "Classroom ID")
    ),
    request_body = UpdateClassroomDto,
    responses(
        (status = 200, description = "Classroom updated successfully", body = Classroom),
        (status = 403, description = "Forbidden - school admin only", body = ErrorResponse),
        (status = 404, description = "Classroom or school not found", body = ErrorResponse)
    ),
    tag = "Classrooms",
    security(("bearer_auth" = []))
)]
pub async fn update_classroom(
    State(state): State<AppState>,
    _auth: CanUpdateClassroom,
    EntityId(id): EntityId,
    ValidatedJson(dto): ValidatedJson<UpdateClassroomDto>,
) -> Result<Json<Classroom>, AppError> {
    let classroom = ClassroomService::update_classroom(&state, id, dto).await?;
    Ok(Json(classroom))
}

#[utoipa::path(
    delete,
    path = "/api/classrooms/{id}",
    params(
        ("id" = Uuid, Path, description = "Classroom ID")
    ),
    responses(
        (status = 200, description = "Classroom deleted successfully", body = MessageResponse),
        (status = 403, description = "Forbidden - school admin only", body = ErrorResponse),
        (status = 404, description = "Classroom not found", body = ErrorResponse)
    ),
    tag = "Classrooms",
    security(("bearer_auth" = []))
)]
pub async fn delete_classroom(
    State(state): State<AppState>,
    _auth: CanDeleteClassroom,
    EntityId(id): EntityId,
) -> Result<Json<MessageResponse>, AppError> {
    ClassroomService::delete_classroom(&state, id).await?;
    Ok(Json(MessageResponse::new("Classroom deleted successfully")))
}
