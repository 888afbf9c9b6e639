use tracing::{debug, info, instrument};
use uuid::Uuid;

use schoolhouse_core::AppError;
use schoolhouse_models::{
    Classroom, ClassroomWithSchool, CreateClassroomDto, NewClassroom, UpdateClassroomDto,
};

use crate::relations::{ensure_school_exists, populate_classrooms};
use crate::state::AppState;

pub struct ClassroomService;

fn classroom_not_found() -> AppError {
    AppError::not_found(anyhow::anyhow!("Classroom not found"))
}

impl ClassroomService {
    #[instrument(skip(state, dto), fields(classroom.name = %dto.name, school.id = %dto.school_id))]
    pub async fn create_classroom(
        state: &AppState,
        school_admin_id: Uuid,
        dto: CreateClassroomDto,
    ) -> Result<Classroom, AppError> {
        ensure_school_exists(state.schools.as_ref(), dto.school_id).await?;

        let classroom = state
            .classrooms
            .create(NewClassroom::from_dto(dto, school_admin_id))
            .await?;

        info!(classroom.id = %classroom.id, "Classroom created successfully");
        Ok(classroom)
    }

    #[instrument(skip(state))]
    pub async fn get_all_classrooms(state: &AppState) -> Result<Vec<ClassroomWithSchool>, AppError> {
        let classrooms = state.classrooms.get_all().await?;
        debug!(returned = classrooms.len(), "Classrooms fetched");

        populate_classrooms(state.schools.as_ref(), classrooms).await
    }

    #[instrument(skip(state), fields(classroom.id = %classroom_id))]
    pub async fn get_classroom_by_id(
        state: &AppState,
        classroom_id: Uuid,
    ) -> Result<ClassroomWithSchool, AppError> {
        let classroom = state
            .classrooms
            .get_by_id(classroom_id)
            .await?
            .ok_or_else(classroom_not_found)?;

        populate_classrooms(state.schools.as_ref(), vec![classroom])
            .await?
            .pop()
            .ok_or_else(classroom_not_found)
    }

    /// Moving a classroom to another school requires that school to exist.
    /// Resending the current school id skips the check, even if that school
    /// has since been deleted.
    #[instrument(skip(state, dto), fields(classroom.id = %classroom_id))]
    pub async fn update_classroom(
        state: &AppState,
        classroom_id: Uuid,
        dto: UpdateClassroomDto,
    ) -> Result<Classroom, AppError> {
        let existing = state
            .classrooms
            .get_by_id(classroom_id)
            .await?
            .ok_or_else(classroom_not_found)?;

        if let Some(school_id) = dto.school_id.filter(|id| *id != existing.school_id) {
            ensure_school_exists(state.schools.as_ref(), school_id).await?;
        }

        let classroom = state
            .classrooms
            .update_by_id(classroom_id, dto)
            .await?
            .ok_or_else(classroom_not_found)?;

        info!("Classroom updated successfully");
        Ok(classroom)
    }

    /// Students in the classroom are left in place.
    #[instrument(skip(state), fields(classroom.id = %classroom_id))]
    pub async fn delete_classroom(state: &AppState, classroom_id: Uuid) -> Result<(), AppError> {
        if !state.classrooms.delete_by_id(classroom_id).await? {
            debug!("Classroom not found for deletion");
            return Err(classroom_not_found());
        }

        info!("Classroom deleted successfully");
        Ok(())
    }
}
