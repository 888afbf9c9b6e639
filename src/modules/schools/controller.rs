use axum::{Json, extract::State, http::StatusCode};

use schoolhouse_core::AppError;
use schoolhouse_models::{CreateSchoolDto, ErrorResponse, MessageResponse, School, UpdateSchoolDto};

use crate::middleware::auth::{CanCreateSchool, CanDeleteSchool, CanUpdateSchool};
use crate::state::AppState;
use crate::validator::{EntityId, ValidatedJson};

use super::service::SchoolService;

#[utoipa::path(
    post,
    path = "/api/schools",
    request_body = CreateSchoolDto,
    responses(
        (status = 201, description = "School created successfully", body = School),
        (status = 400, description = "Invalid token or malformed body", body = ErrorResponse),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Forbidden - superadmin only", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Schools",
    security(("bearer_auth" = []))
)]
pub async fn create_school(
    State(state): State<AppState>,
    CanCreateSchool(auth_user): CanCreateSchool,
    ValidatedJson(dto): ValidatedJson<CreateSchoolDto>,
) -> Result<(StatusCode, Json<School>), AppError> {
    let school =
        SchoolService::create_school(state.schools.as_ref(), auth_user.user_id()?, dto).await?;
    Ok((StatusCode::CREATED, Json(school)))
}

#[utoipa::path(
    get,
    path = "/api/schools",
    responses(
        (status = 200, description = "All schools, oldest first", body = Vec<School>)
    ),
    tag = "Schools"
)]
pub async fn get_all_schools(State(state): State<AppState>) -> Result<Json<Vec<School>>, AppError> {
    let schools = SchoolService::get_all_schools(state.schools.as_ref()).await?;
    Ok(Json(schools))
}

#[utoipa::path(
    get,
    path = "/api/schools/{id}",
    params(
        ("id" = Uuid, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "School details", body = School),
        (status = 404, description = "School not found", body = ErrorResponse)
    ),
    tag = "Schools"
)]
pub async fn get_school(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<School>, AppError> {
    let school = SchoolService::get_school_by_id(state.schools.as_ref(), id).await?;
    Ok(Json(school))
}

#[utoipa::path(
    put,
    path = "/api/schools/{id}",
    params(
        ("id" = Uuid, Path, description = "School ID")
    ),
    request_body = UpdateSchoolDto,
    responses(
        (status = 200, description = "School updated successfully", body = School),
        (status = 403, description = "Forbidden - superadmin only", body = ErrorResponse),
        (status = 404, description = "School not found", body = ErrorResponse)
    ),
    tag = "Schools",
    security(("bearer_auth" = []))
)]
pub async fn update_school(
    State(state): State<AppState>,
    _auth: CanUpdateSchool,
    EntityId(id): EntityId,
    ValidatedJson(dto): ValidatedJson<UpdateSchoolDto>,
) -> Result<Json<School>, AppError> {
    let school = SchoolService::update_school(state.schools.as_ref(), id, dto).await?;
    Ok(Json(school))
}

#[utoipa::path(
    delete,
    path = "/api/schools/{id}",
    params(
        ("id" = Uuid, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "School deleted successfully", body = MessageResponse),
        (status = 403, description = "Forbidden - superadmin only", body = ErrorResponse),
        (status = 404, description = "School not found", body = ErrorResponse)
    ),
    tag = "Schools",
    security(("bearer_auth" = []))
)]
pub async fn delete_school(
    State(state): State<AppState>,
    _auth: CanDeleteSchool,
    EntityId(id): EntityId,
) -> Result<Json<MessageResponse>, AppError> {
    SchoolService::delete_school(state.schools.as_ref(), id).await?;
    Ok(Json(MessageResponse::new("School deleted successfully")))
}
