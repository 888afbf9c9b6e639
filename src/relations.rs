//! Checks and lookups that follow references between entities.
//!
//! Writes call the `ensure_*` functions before touching the store. The check
//! and the write are separate store calls; a parent deleted in between
//! leaves a dangling reference, which reads then populate as `null`.

use std::collections::{HashMap, HashSet};

use tracing::debug;
use uuid::Uuid;

use schoolhouse_core::AppError;
use schoolhouse_db::RecordStore;
use schoolhouse_models::{
    Classroom, ClassroomSummary, ClassroomWithSchool, School, SchoolSummary, Student,
    StudentWithClassroom,
};

pub async fn ensure_school_exists(
    schools: &dyn RecordStore<School>,
    school_id: Uuid,
) -> Result<School, AppError> {
    schools.get_by_id(school_id).await?.ok_or_else(|| {
        debug!(school.id = %school_id, "Referenced school does not exist");
        AppError::not_found(anyhow::anyhow!("School not found"))
    })
}

pub async fn ensure_classroom_exists(
    classrooms: &dyn RecordStore<Classroom>,
    classroom_id: Uuid,
) -> Result<Classroom, AppError> {
    classrooms.get_by_id(classroom_id).await?.ok_or_else(|| {
        debug!(classroom.id = %classroom_id, "Referenced classroom does not exist");
        AppError::not_found(anyhow::anyhow!("Classroom not found"))
    })
}

/// Looks up each distinct id once. Missing ids are simply absent from the map.
async fn resolve<R, T>(
    store: &dyn RecordStore<R>,
    ids: impl IntoIterator<Item = Uuid>,
    project: impl Fn(&R) -> T,
) -> Result<HashMap<Uuid, T>, AppError>
where
    R: schoolhouse_db::Record,
{
    let mut resolved = HashMap::new();
    for id in ids.into_iter().collect::<HashSet<_>>() {
        if let Some(record) = store.get_by_id(id).await? {
            resolved.insert(id, project(&record));
        }
    }
    Ok(resolved)
}

pub async fn populate_classrooms(
    schools: &dyn RecordStore<School>,
    classrooms: Vec<Classroom>,
) -> Result<Vec<ClassroomWithSchool>, AppError> {
    let summaries = resolve(
        schools,
        classrooms.iter().map(|c| c.school_id),
        |school: &School| SchoolSummary::from(school),
    )
    .await?;

    Ok(classrooms
        .into_iter()
        .map(|classroom| ClassroomWithSchool {
            school: summaries.get(&classroom.school_id).cloned(),
            classroom,
        })
        .collect())
}

pub async fn populate_students(
    classrooms: &dyn RecordStore<Classroom>,
    students: Vec<Student>,
) -> Result<Vec<StudentWithClassroom>, AppError> {
    let summaries = resolve(
        classrooms,
        students.iter().map(|s| s.classroom_id),
        |classroom: &Classroom| ClassroomSummary::from(classroom),
    )
    .await?;

    Ok(students
        .into_iter()
        .map(|student| StudentWithClassroom {
            classroom: summaries.get(&student.classroom_id).cloned(),
            student,
        })
        .collect())
}
