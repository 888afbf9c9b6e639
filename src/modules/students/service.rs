use tracing::{debug, info, instrument};
use uuid::Uuid;

use schoolhouse_core::AppError;
use schoolhouse_models::{CreateStudentDto, Student, StudentWithClassroom, UpdateStudentDto};

use crate::relations::{ensure_classroom_exists, populate_students};
use crate::state::AppState;

pub struct StudentService;

fn student_not_found() -> AppError {
    AppError::not_found(anyhow::anyhow!("Student not found"))
}

impl StudentService {
    /// The optional school reference is stored as sent; it is not compared
    /// with the classroom's school.
    #[instrument(skip(state, dto), fields(student.name = %dto.name, classroom.id = %dto.classroom_id))]
    pub async fn create_student(
        state: &AppState,
        dto: CreateStudentDto,
    ) -> Result<Student, AppError> {
        ensure_classroom_exists(state.classrooms.as_ref(), dto.classroom_id).await?;

        let student = state.students.create(dto.into()).await?;

        info!(student.id = %student.id, "Student created successfully");
        Ok(student)
    }

    #[instrument(skip(state))]
    pub async fn get_all_students(state: &AppState) -> Result<Vec<StudentWithClassroom>, AppError> {
        let students = state.students.get_all().await?;
        debug!(returned = students.len(), "Students fetched");

        populate_students(state.classrooms.as_ref(), students).await
    }

    #[instrument(skip(state), fields(student.id = %student_id))]
    pub async fn get_student_by_id(
        state: &AppState,
        student_id: Uuid,
    ) -> Result<StudentWithClassroom, AppError> {
        let student = state
            .students
            .get_by_id(student_id)
            .await?
            .ok_or_else(student_not_found)?;

        populate_students(state.classrooms.as_ref(), vec![student])
            .await?
            .pop()
            .ok_or_else(student_not_found)
    }

    #[instrument(skip(state, dto), fields(student.id = %student_id))]
    pub async fn update_student(
        state: &AppState,
        student_id: Uuid,
        dto: UpdateStudentDto,
    ) -> Result<Student, AppError> {
        let existing = state
            .students
            .get_by_id(student_id)
            .await?
            .ok_or_else(student_not_found)?;

        if let Some(classroom_id) = dto.classroom_id.filter(|id| *id != existing.classroom_id) {
            ensure_classroom_exists(state.classrooms.as_ref(), classroom_id).await?;
        }

        let student = state
            .students
            .update_by_id(student_id, dto)
            .await?
            .ok_or_else(student_not_found)?;

        info!("Student updated successfully");
        Ok(student)
    }

    #[instrument(skip(state), fields(student.id = %student_id))]
    pub async fn delete_student(state: &AppState, student_id: Uuid) -> Result<(), AppError> {
        if !state.students.delete_by_id(student_id).await? {
            debug!("Student not found for deletion");
            return Err(student_not_found());
        }

        info!("Student deleted successfully");
        Ok(())
    }
}
