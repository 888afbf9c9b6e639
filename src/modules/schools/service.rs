use tracing::{debug, info, instrument};
use uuid::Uuid;

use schoolhouse_core::AppError;
use schoolhouse_db::RecordStore;
use schoolhouse_models::{CreateSchoolDto, NewSchool, School, UpdateSchoolDto};

pub struct SchoolService;

fn school_not_found() -> AppError {
    AppError::not_found(anyhow::anyhow!("School not found"))
}

impl SchoolService {
    #[instrument(skip(schools, dto), fields(school.name = %dto.name, superadmin.id = %superadmin_id))]
    pub async fn create_school(
        schools: &dyn RecordStore<School>,
        superadmin_id: Uuid,
        dto: CreateSchoolDto,
    ) -> Result<School, AppError> {
        let school = schools
            .create(NewSchool::from_dto(dto, superadmin_id))
            .await?;

        info!(school.id = %school.id, "School created successfully");
        Ok(school)
    }

    #[instrument(skip(schools))]
    pub async fn get_all_schools(schools: &dyn RecordStore<School>) -> Result<Vec<School>, AppError> {
        let all = schools.get_all().await?;
        debug!(returned = all.len(), "Schools fetched");
        Ok(all)
    }

    #[instrument(skip(schools), fields(school.id = %school_id))]
    pub async fn get_school_by_id(
        schools: &dyn RecordStore<School>,
        school_id: Uuid,
    ) -> Result<School, AppError> {
        schools
            .get_by_id(school_id)
            .await?
            .ok_or_else(school_not_found)
    }

    #[instrument(skip(schools, dto), fields(school.id = %school_id))]
    pub async fn update_school(
        schools: &dyn RecordStore<School>,
        school_id: Uuid,
        dto: UpdateSchoolDto,
    ) -> Result<School, AppError> {
        let school = schools
            .update_by_id(school_id, dto)
            .await?
            .ok_or_else(school_not_found)?;

        info!("School updated successfully");
        Ok(school)
    }

    /// Classrooms that reference the school are left in place.
    #[instrument(skip(schools), fields(school.id = %school_id))]
    pub async fn delete_school(
        schools: &dyn RecordStore<School>,
        school_id: Uuid,
    ) -> Result<(), AppError> {
        if !schools.delete_by_id(school_id).await? {
            debug!("School not found for deletion");
            return Err(school_not_found());
        }

        info!("School deleted successfully");
        Ok(())
    }
}
