//! PostgreSQL-backed stores.
//!
//! Queries are runtime-checked (`query_as::<_, T>`) so the crate builds
//! without a live database. Partial updates are expressed with `COALESCE`,
//! so an absent patch field keeps the stored value.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, error, instrument, warn};
use uuid::Uuid;

use schoolhouse_core::AppError;
use schoolhouse_models::{
    Classroom, NewClassroom, NewSchool, NewStudent, NewUser, School, Student, UpdateClassroomDto,
    UpdateSchoolDto, UpdateStudentDto, User,
};

use crate::store::{RecordStore, UserStore, email_taken};

const SCHOOL_COLUMNS: &str = "id, name, address, superadmin_id, created_at, updated_at";
const CLASSROOM_COLUMNS: &str =
    "id, name, capacity, school_id, school_admin_id, created_at, updated_at";
const STUDENT_COLUMNS: &str = "id, name, age, school_id, classroom_id, created_at, updated_at";
const USER_COLUMNS: &str = "id, name, email, password_hash, role, created_at, updated_at";

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_error(table: &'static str, e: sqlx::Error) -> AppError {
    error!(error = %e, db.table = table, "Database error");
    AppError::database(e)
}

async fn delete_from(pool: &PgPool, table: &'static str, id: Uuid) -> Result<bool, AppError> {
    let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", table))
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| db_error(table, e))?;

    if result.rows_affected() == 0 {
        debug!(db.table = table, record.id = %id, "Nothing to delete");
    }
    Ok(result.rows_affected() > 0)
}

#[async_trait]
impl RecordStore<School> for PgStore {
    #[instrument(skip(self, draft), fields(school.name = %draft.name, db.operation = "INSERT", db.table = "schools"))]
    async fn create(&self, draft: NewSchool) -> Result<School, AppError> {
        sqlx::query_as::<_, School>(&format!(
            "INSERT INTO schools (name, address, superadmin_id) VALUES ($1, $2, $3)
             RETURNING {}",
            SCHOOL_COLUMNS
        ))
        .bind(&draft.name)
        .bind(&draft.address)
        .bind(draft.superadmin_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("schools", e))
    }

    #[instrument(skip(self), fields(school.id = %id, db.operation = "SELECT", db.table = "schools"))]
    async fn get_by_id(&self, id: Uuid) -> Result<Option<School>, AppError> {
        sqlx::query_as::<_, School>(&format!(
            "SELECT {} FROM schools WHERE id = $1",
            SCHOOL_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("schools", e))
    }

    #[instrument(skip(self), fields(db.operation = "SELECT", db.table = "schools"))]
    async fn get_all(&self) -> Result<Vec<School>, AppError> {
        sqlx::query_as::<_, School>(&format!(
            "SELECT {} FROM schools ORDER BY created_at ASC, id ASC",
            SCHOOL_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("schools", e))
    }

    #[instrument(skip(self, patch), fields(school.id = %id, db.operation = "UPDATE", db.table = "schools"))]
    async fn update_by_id(
        &self,
        id: Uuid,
        patch: UpdateSchoolDto,
    ) -> Result<Option<School>, AppError> {
        sqlx::query_as::<_, School>(&format!(
            "UPDATE schools
             SET name = COALESCE($2, name),
                 address = COALESCE($3, address),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            SCHOOL_COLUMNS
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.address)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("schools", e))
    }

    #[instrument(skip(self), fields(school.id = %id, db.operation = "DELETE", db.table = "schools"))]
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        delete_from(&self.pool, "schools", id).await
    }
}

#[async_trait]
impl RecordStore<Classroom> for PgStore {
    #[instrument(skip(self, draft), fields(classroom.name = %draft.name, db.operation = "INSERT", db.table = "classrooms"))]
    async fn create(&self, draft: NewClassroom) -> Result<Classroom, AppError> {
        sqlx::query_as::<_, Classroom>(&format!(
            "INSERT INTO classrooms (name, capacity, school_id, school_admin_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            CLASSROOM_COLUMNS
        ))
        .bind(&draft.name)
        .bind(draft.capacity)
        .bind(draft.school_id)
        .bind(draft.school_admin_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("classrooms", e))
    }

    #[instrument(skip(self), fields(classroom.id = %id, db.operation = "SELECT", db.table = "classrooms"))]
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Classroom>, AppError> {
        sqlx::query_as::<_, Classroom>(&format!(
            "SELECT {} FROM classrooms WHERE id = $1",
            CLASSROOM_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("classrooms", e))
    }

    #[instrument(skip(self), fields(db.operation = "SELECT", db.table = "classrooms"))]
    async fn get_all(&self) -> Result<Vec<Classroom>, AppError> {
        sqlx::query_as::<_, Classroom>(&format!(
            "SELECT {} FROM classrooms ORDER BY created_at ASC, id ASC",
            CLASSROOM_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("classrooms", e))
    }

    #[instrument(skip(self, patch), fields(classroom.id = %id, db.operation = "UPDATE", db.table = "classrooms"))]
    async fn update_by_id(
        &self,
        id: Uuid,
        patch: UpdateClassroomDto,
    ) -> Result<Option<Classroom>, AppError> {
        sqlx::query_as::<_, Classroom>(&format!(
            "UPDATE classrooms
             SET name = COALESCE($2, name),
                 capacity = COALESCE($3, capacity),
                 school_id = COALESCE($4, school_id),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            CLASSROOM_COLUMNS
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.capacity)
        .bind(patch.school_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("classrooms", e))
    }

    #[instrument(skip(self), fields(classroom.id = %id, db.operation = "DELETE", db.table = "classrooms"))]
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        delete_from(&self.pool, "classrooms", id).await
    }
}

#[async_trait]
impl RecordStore<Student> for PgStore {
    #[instrument(skip(self, draft), fields(student.name = %draft.name, db.operation = "INSERT", db.table = "students"))]
    async fn create(&self, draft: NewStudent) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(&format!(
            "INSERT INTO students (name, age, school_id, classroom_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            STUDENT_COLUMNS
        ))
        .bind(&draft.name)
        .bind(draft.age)
        .bind(draft.school_id)
        .bind(draft.classroom_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("students", e))
    }

    #[instrument(skip(self), fields(student.id = %id, db.operation = "SELECT", db.table = "students"))]
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Student>, AppError> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {} FROM students WHERE id = $1",
            STUDENT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("students", e))
    }

    #[instrument(skip(self), fields(db.operation = "SELECT", db.table = "students"))]
    async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {} FROM students ORDER BY created_at ASC, id ASC",
            STUDENT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("students", e))
    }

    #[instrument(skip(self, patch), fields(student.id = %id, db.operation = "UPDATE", db.table = "students"))]
    async fn update_by_id(
        &self,
        id: Uuid,
        patch: UpdateStudentDto,
    ) -> Result<Option<Student>, AppError> {
        sqlx::query_as::<_, Student>(&format!(
            "UPDATE students
             SET name = COALESCE($2, name),
                 age = COALESCE($3, age),
                 school_id = COALESCE($4, school_id),
                 classroom_id = COALESCE($5, classroom_id),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            STUDENT_COLUMNS
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.age)
        .bind(patch.school_id)
        .bind(patch.classroom_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("students", e))
    }

    #[instrument(skip(self), fields(student.id = %id, db.operation = "DELETE", db.table = "students"))]
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        delete_from(&self.pool, "students", id).await
    }
}

#[async_trait]
impl UserStore for PgStore {
    #[instrument(skip(self, user), fields(user.email = %user.email, db.operation = "INSERT", db.table = "users"))]
    async fn create(&self, user: NewUser) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (name, email, password_hash, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            USER_COLUMNS
        ))
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                warn!(user.email = %user.email, "Attempted to register an existing email");
                return email_taken();
            }
            db_error("users", e)
        })
    }

    #[instrument(skip(self, email), fields(db.operation = "SELECT", db.table = "users"))]
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE LOWER(email) = LOWER($1)",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("users", e))
    }
}
