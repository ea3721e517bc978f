//! Repository for the `students` table.

use sqlx::PgPool;
use university_core::types::DbId;

use crate::models::student::{CreateStudent, Student, UpdateStudent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, cpf, name, email, phone, birthday, created_at, updated_at";

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row.
    ///
    /// The `cpf` column carries a unique constraint; a duplicate insert
    /// surfaces as a database error.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (cpf, name, email, phone, birthday)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.cpf)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.birthday)
            .fetch_one(pool)
            .await
    }

    /// Find a student by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all students in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY id ASC");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// Replace every client-owned column of a student.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                cpf = $2,
                name = $3,
                email = $4,
                phone = $5,
                birthday = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.cpf)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.birthday)
            .fetch_optional(pool)
            .await
    }

    /// Delete a student by ID. Returns `true` if a row was removed.
    ///
    /// Dependent registrations (and their grades) are removed by the
    /// schema's cascade rules.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
