//! Repository for the `courses` table.

use sqlx::PgPool;
use university_core::types::DbId;

use crate::models::course::{Course, CreateCourse, UpdateCourse};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, requirement, workload_hours, price, created_at, updated_at";

/// Provides CRUD operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCourse) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses (name, requirement, workload_hours, price)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(&input.name)
            .bind(&input.requirement)
            .bind(input.workload_hours)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Find a course by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all courses in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses ORDER BY id ASC");
        sqlx::query_as::<_, Course>(&query).fetch_all(pool).await
    }

    /// Replace every client-owned column of a course.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourse,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "UPDATE courses SET
                name = $2,
                requirement = $3,
                workload_hours = $4,
                price = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.requirement)
            .bind(input.workload_hours)
            .bind(input.price)
            .fetch_optional(pool)
            .await
    }

    /// Delete a course by ID. Returns `true` if a row was removed.
    ///
    /// Dependent classes cascade, which in turn removes their
    /// registrations and grades.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
