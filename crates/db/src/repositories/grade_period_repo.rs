//! Repository for the `grade_periods` table.

use sqlx::PgPool;
use university_core::types::DbId;

use crate::models::grade_period::{CreateGradePeriod, GradePeriod, UpdateGradePeriod};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, period, created_at, updated_at";

/// Provides CRUD operations for grade periods.
pub struct GradePeriodRepo;

impl GradePeriodRepo {
    /// Insert a new grade period, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGradePeriod,
    ) -> Result<GradePeriod, sqlx::Error> {
        let query = format!(
            "INSERT INTO grade_periods (period)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GradePeriod>(&query)
            .bind(&input.period)
            .fetch_one(pool)
            .await
    }

    /// Find a grade period by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GradePeriod>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM grade_periods WHERE id = $1");
        sqlx::query_as::<_, GradePeriod>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all grade periods in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<GradePeriod>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM grade_periods ORDER BY id ASC");
        sqlx::query_as::<_, GradePeriod>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace every client-owned column of a grade period.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGradePeriod,
    ) -> Result<Option<GradePeriod>, sqlx::Error> {
        let query = format!(
            "UPDATE grade_periods SET
                period = $2,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GradePeriod>(&query)
            .bind(id)
            .bind(&input.period)
            .fetch_optional(pool)
            .await
    }

    /// Delete a grade period by ID. Returns `true` if a row was removed.
    ///
    /// Dependent grades are removed by the schema's cascade rules.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM grade_periods WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
