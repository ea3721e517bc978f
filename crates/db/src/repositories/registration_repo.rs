//! Repository for the `registrations` table.
//!
//! The detail queries eager-load the full relation chain in one explicit
//! join: registration -> student, and registration -> class -> instructor
//! and course.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use university_core::types::{DbId, Timestamp};

use crate::models::class::ClassDetail;
use crate::models::course::Course;
use crate::models::instructor::Instructor;
use crate::models::registration::{
    CreateRegistration, Registration, RegistrationDetail, UpdateRegistration,
};
use crate::models::student::Student;

/// Column list shared across flat queries to avoid repetition.
const COLUMNS: &str = "id, class_id, student_id, registration_date, created_at, updated_at";

/// Column list for the four-table join, with related columns aliased
/// under `student_`, `class_`, `instructor_`, and `course_` prefixes.
const DETAIL_COLUMNS: &str = "r.id, r.class_id, r.student_id, r.registration_date, \
    r.created_at, r.updated_at, \
    s.cpf AS student_cpf, s.name AS student_name, s.email AS student_email, \
    s.phone AS student_phone, s.birthday AS student_birthday, \
    s.created_at AS student_created_at, s.updated_at AS student_updated_at, \
    c.instructor_id AS class_instructor_id, c.course_id AS class_course_id, \
    c.start_date AS class_start_date, c.end_date AS class_end_date, \
    c.workload_hours AS class_workload_hours, \
    c.created_at AS class_created_at, c.updated_at AS class_updated_at, \
    i.name AS instructor_name, i.email AS instructor_email, i.phone AS instructor_phone, \
    i.hourly_rate AS instructor_hourly_rate, i.certificates AS instructor_certificates, \
    i.created_at AS instructor_created_at, i.updated_at AS instructor_updated_at, \
    co.name AS course_name, co.requirement AS course_requirement, \
    co.workload_hours AS course_workload_hours, co.price AS course_price, \
    co.created_at AS course_created_at, co.updated_at AS course_updated_at";

/// Flat row produced by the four-table join. Reassembled into the nested
/// [`RegistrationDetail`] shape before leaving the repository.
#[derive(FromRow)]
struct RegistrationDetailRow {
    id: DbId,
    class_id: DbId,
    student_id: DbId,
    registration_date: Option<NaiveDate>,
    created_at: Timestamp,
    updated_at: Timestamp,
    student_cpf: String,
    student_name: String,
    student_email: String,
    student_phone: String,
    student_birthday: Option<NaiveDate>,
    student_created_at: Timestamp,
    student_updated_at: Timestamp,
    class_instructor_id: DbId,
    class_course_id: DbId,
    class_start_date: Option<NaiveDate>,
    class_end_date: Option<NaiveDate>,
    class_workload_hours: Option<i32>,
    class_created_at: Timestamp,
    class_updated_at: Timestamp,
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

impl From<RegistrationDetailRow> for RegistrationDetail {
    fn from(row: RegistrationDetailRow) -> Self {
        RegistrationDetail {
            id: row.id,
            class_id: row.class_id,
            student_id: row.student_id,
            registration_date: row.registration_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
            class: ClassDetail {
                id: row.class_id,
                instructor_id: row.class_instructor_id,
                course_id: row.class_course_id,
                start_date: row.class_start_date,
                end_date: row.class_end_date,
                workload_hours: row.class_workload_hours,
                created_at: row.class_created_at,
                updated_at: row.class_updated_at,
                instructor: Instructor {
                    id: row.class_instructor_id,
                    name: row.instructor_name,
                    email: row.instructor_email,
                    phone: row.instructor_phone,
                    hourly_rate: row.instructor_hourly_rate,
                    certificates: row.instructor_certificates,
                    created_at: row.instructor_created_at,
                    updated_at: row.instructor_updated_at,
                },
                course: Course {
                    id: row.class_course_id,
                    name: row.course_name,
                    requirement: row.course_requirement,
                    workload_hours: row.course_workload_hours,
                    price: row.course_price,
                    created_at: row.course_created_at,
                    updated_at: row.course_updated_at,
                },
            },
            student: Student {
                id: row.student_id,
                cpf: row.student_cpf,
                name: row.student_name,
                email: row.student_email,
                phone: row.student_phone,
                birthday: row.student_birthday,
                created_at: row.student_created_at,
                updated_at: row.student_updated_at,
            },
        }
    }
}

/// Provides CRUD operations for registrations.
pub struct RegistrationRepo;

impl RegistrationRepo {
    /// Insert a new registration, returning the created row.
    ///
    /// `class_id` and `student_id` must reference existing rows; a
    /// dangling reference surfaces as a foreign-key database error.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRegistration,
    ) -> Result<Registration, sqlx::Error> {
        let query = format!(
            "INSERT INTO registrations (class_id, student_id, registration_date)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(input.class_id)
            .bind(input.student_id)
            .bind(input.registration_date)
            .fetch_one(pool)
            .await
    }

    /// Find a registration by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Registration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM registrations WHERE id = $1");
        sqlx::query_as::<_, Registration>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a registration by ID with its student and class chain
    /// eager-loaded.
    pub async fn find_detail_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RegistrationDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM registrations r
             JOIN students s ON s.id = r.student_id
             JOIN classes c ON c.id = r.class_id
             JOIN instructors i ON i.id = c.instructor_id
             JOIN courses co ON co.id = c.course_id
             WHERE r.id = $1"
        );
        let row = sqlx::query_as::<_, RegistrationDetailRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(RegistrationDetail::from))
    }

    /// List all registrations in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Registration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM registrations ORDER BY id ASC");
        sqlx::query_as::<_, Registration>(&query)
            .fetch_all(pool)
            .await
    }

    /// List all registrations with the full relation chain eager-loaded,
    /// in insertion order.
    pub async fn list_all_detail(pool: &PgPool) -> Result<Vec<RegistrationDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM registrations r
             JOIN students s ON s.id = r.student_id
             JOIN classes c ON c.id = r.class_id
             JOIN instructors i ON i.id = c.instructor_id
             JOIN courses co ON co.id = c.course_id
             ORDER BY r.id ASC"
        );
        let rows = sqlx::query_as::<_, RegistrationDetailRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(RegistrationDetail::from).collect())
    }

    /// Replace every client-owned column of a registration.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRegistration,
    ) -> Result<Option<Registration>, sqlx::Error> {
        let query = format!(
            "UPDATE registrations SET
                class_id = $2,
                student_id = $3,
                registration_date = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(id)
            .bind(input.class_id)
            .bind(input.student_id)
            .bind(input.registration_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a registration by ID. Returns `true` if a row was removed.
    ///
    /// Dependent grades are removed by the schema's cascade rules.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM registrations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
