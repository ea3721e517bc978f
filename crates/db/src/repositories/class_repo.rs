//! Repository for the `classes` table.
//!
//! Besides the flat CRUD surface, this repository exposes detail queries
//! that eager-load the related instructor and course rows through an
//! explicit SQL join.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use university_core::types::{DbId, Timestamp};

use crate::models::class::{Class, ClassDetail, CreateClass, UpdateClass};
use crate::models::course::Course;
use crate::models::instructor::Instructor;

/// Column list shared across flat queries to avoid repetition.
const COLUMNS: &str =
    "id, instructor_id, course_id, start_date, end_date, workload_hours, created_at, updated_at";

/// Column list for the instructor/course join, with related columns
/// aliased under an `instructor_` / `course_` prefix.
const DETAIL_COLUMNS: &str = "c.id, c.instructor_id, c.course_id, c.start_date, c.end_date, \
    c.workload_hours, c.created_at, c.updated_at, \
    i.name AS instructor_name, i.email AS instructor_email, i.phone AS instructor_phone, \
    i.hourly_rate AS instructor_hourly_rate, i.certificates AS instructor_certificates, \
    i.created_at AS instructor_created_at, i.updated_at AS instructor_updated_at, \
    co.name AS course_name, co.requirement AS course_requirement, \
    co.workload_hours AS course_workload_hours, co.price AS course_price, \
    co.created_at AS course_created_at, co.updated_at AS course_updated_at";

/// Flat row produced by the instructor/course join. Reassembled into the
/// nested [`ClassDetail`] shape before leaving the repository.
#[derive(FromRow)]
struct ClassDetailRow {
    id: DbId,
    instructor_id: DbId,
    course_id: DbId,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    workload_hours: Option<i32>,
    created_at: Timestamp,
    updated_at: Timestamp,
    instructor_name: String,
    instructor_email: String,
    instructor_phone: String,
    instructor_hourly_rate: Option<Decimal>,
    instructor_certificates: Option<String>,
    instructor_created_at: Timestamp,
    instructor_updated_at: Timestamp,
    course_name: String,
    course_requirement: Option<String>,
    course_workload_hours: Option<i32>,
    course_price: Decimal,
    course_created_at: Timestamp,
    course_updated_at: Timestamp,
}

impl From<ClassDetailRow> for ClassDetail {
    fn from(row: ClassDetailRow) -> Self {
        ClassDetail {
            id: row.id,
            instructor_id: row.instructor_id,
            course_id: row.course_id,
            start_date: row.start_date,
            end_date: row.end_date,
            workload_hours: row.workload_hours,
            created_at: row.created_at,
            updated_at: row.updated_at,
            instructor: Instructor {
                id: row.instructor_id,
                name: row.instructor_name,
                email: row.instructor_email,
                phone: row.instructor_phone,
                hourly_rate: row.instructor_hourly_rate,
                certificates: row.instructor_certificates,
                created_at: row.instructor_created_at,
                updated_at: row.instructor_updated_at,
            },
            course: Course {
                id: row.course_id,
                name: row.course_name,
                requirement: row.course_requirement,
                workload_hours: row.course_workload_hours,
                price: row.course_price,
                created_at: row.course_created_at,
                updated_at: row.course_updated_at,
            },
        }
    }
}

/// Provides CRUD operations for classes.
pub struct ClassRepo;

impl ClassRepo {
    /// Insert a new class, returning the created row.
    ///
    /// `instructor_id` and `course_id` must reference existing rows; a
    /// dangling reference surfaces as a foreign-key database error.
    pub async fn create(pool: &PgPool, input: &CreateClass) -> Result<Class, sqlx::Error> {
        let query = format!(
            "INSERT INTO classes (instructor_id, course_id, start_date, end_date, workload_hours)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Class>(&query)
            .bind(input.instructor_id)
            .bind(input.course_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.workload_hours)
            .fetch_one(pool)
            .await
    }

    /// Find a class by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Class>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes WHERE id = $1");
        sqlx::query_as::<_, Class>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a class by ID with its instructor and course eager-loaded.
    pub async fn find_detail_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ClassDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM classes c
             JOIN instructors i ON i.id = c.instructor_id
             JOIN courses co ON co.id = c.course_id
             WHERE c.id = $1"
        );
        let row = sqlx::query_as::<_, ClassDetailRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(ClassDetail::from))
    }

    /// List all classes in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Class>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes ORDER BY id ASC");
        sqlx::query_as::<_, Class>(&query).fetch_all(pool).await
    }

    /// List all classes with instructors and courses eager-loaded, in
    /// insertion order.
    pub async fn list_all_detail(pool: &PgPool) -> Result<Vec<ClassDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM classes c
             JOIN instructors i ON i.id = c.instructor_id
             JOIN courses co ON co.id = c.course_id
             ORDER BY c.id ASC"
        );
        let rows = sqlx::query_as::<_, ClassDetailRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(ClassDetail::from).collect())
    }

    /// Replace every client-owned column of a class.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClass,
    ) -> Result<Option<Class>, sqlx::Error> {
        let query = format!(
            "UPDATE classes SET
                instructor_id = $2,
                course_id = $3,
                start_date = $4,
                end_date = $5,
                workload_hours = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Class>(&query)
            .bind(id)
            .bind(input.instructor_id)
            .bind(input.course_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.workload_hours)
            .fetch_optional(pool)
            .await
    }

    /// Delete a class by ID. Returns `true` if a row was removed.
    ///
    /// Dependent registrations (and their grades) are removed by the
    /// schema's cascade rules.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM classes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
