//! Repository for the `instructors` table.

use sqlx::PgPool;
use university_core::types::DbId;

use crate::models::instructor::{CreateInstructor, Instructor, UpdateInstructor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, hourly_rate, certificates, created_at, updated_at";

/// Provides CRUD operations for instructors.
pub struct InstructorRepo;

impl InstructorRepo {
    /// Insert a new instructor, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInstructor,
    ) -> Result<Instructor, sqlx::Error> {
        let query = format!(
            "INSERT INTO instructors (name, email, phone, hourly_rate, certificates)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Instructor>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.hourly_rate)
            .bind(&input.certificates)
            .fetch_one(pool)
            .await
    }

    /// Find an instructor by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Instructor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM instructors WHERE id = $1");
        sqlx::query_as::<_, Instructor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all instructors in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Instructor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM instructors ORDER BY id ASC");
        sqlx::query_as::<_, Instructor>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace every client-owned column of an instructor.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInstructor,
    ) -> Result<Option<Instructor>, sqlx::Error> {
        let query = format!(
            "UPDATE instructors SET
                name = $2,
                email = $3,
                phone = $4,
                hourly_rate = $5,
                certificates = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Instructor>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.hourly_rate)
            .bind(&input.certificates)
            .fetch_optional(pool)
            .await
    }

    /// Delete an instructor by ID. Returns `true` if a row was removed.
    ///
    /// Dependent classes cascade, which in turn removes their
    /// registrations and grades.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM instructors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
