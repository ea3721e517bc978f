//! Class entity model and DTOs.
//!
//! A class is one offering of a course taught by one instructor. Related
//! rows are reached through explicit foreign keys; [`ClassDetail`] is the
//! eager-loaded shape produced by an explicit SQL join, never by lazy
//! traversal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use university_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::course::Course;
use crate::models::instructor::Instructor;

/// A row from the `classes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Class {
    pub id: DbId,
    pub instructor_id: DbId,
    pub course_id: DbId,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub workload_hours: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A class with its instructor and course rows embedded.
#[derive(Debug, Clone, Serialize)]
pub struct ClassDetail {
    pub id: DbId,
    pub instructor_id: DbId,
    pub course_id: DbId,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub workload_hours: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub instructor: Instructor,
    pub course: Course,
}

/// DTO for creating a new class.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClass {
    pub instructor_id: DbId,
    pub course_id: DbId,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub workload_hours: Option<i32>,
}

/// DTO for replacing an existing class (full-record replace).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateClass {
    pub instructor_id: DbId,
    pub course_id: DbId,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub workload_hours: Option<i32>,
}
