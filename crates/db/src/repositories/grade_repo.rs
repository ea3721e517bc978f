//! Repository for the `grades` table.

use sqlx::PgPool;
use university_core::types::DbId;

use crate::models::grade::{CreateGrade, Grade, UpdateGrade};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, value, registration_id, grade_period_id, created_at, updated_at";

/// Provides CRUD operations for grades.
pub struct GradeRepo;

impl GradeRepo {
    /// Insert a new grade, returning the created row.
    ///
    /// `registration_id` and `grade_period_id` must reference existing
    /// rows; a dangling reference surfaces as a foreign-key database error.
    pub async fn create(pool: &PgPool, input: &CreateGrade) -> Result<Grade, sqlx::Error> {
        let query = format!(
            "INSERT INTO grades (value, registration_id, grade_period_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Grade>(&query)
            .bind(input.value)
            .bind(input.registration_id)
            .bind(input.grade_period_id)
            .fetch_one(pool)
            .await
    }

    /// Find a grade by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Grade>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM grades WHERE id = $1");
        sqlx::query_as::<_, Grade>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all grades for a registration in insertion order.
    pub async fn list_by_registration(
        pool: &PgPool,
        registration_id: DbId,
    ) -> Result<Vec<Grade>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM grades WHERE registration_id = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, Grade>(&query)
            .bind(registration_id)
            .fetch_all(pool)
            .await
    }

    /// Replace every client-owned column of a grade.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGrade,
    ) -> Result<Option<Grade>, sqlx::Error> {
        let query = format!(
            "UPDATE grades SET
                value = $2,
                registration_id = $3,
                grade_period_id = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Grade>(&query)
            .bind(id)
            .bind(input.value)
            .bind(input.registration_id)
            .bind(input.grade_period_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a grade by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM grades WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
