//! Registration entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use university_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::class::ClassDetail;
use crate::models::student::Student;

/// A row from the `registrations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Registration {
    pub id: DbId,
    pub class_id: DbId,
    pub student_id: DbId,
    pub registration_date: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A registration with its student and class (including the class's
/// instructor and course) embedded.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationDetail {
    pub id: DbId,
    pub class_id: DbId,
    pub student_id: DbId,
    pub registration_date: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub class: ClassDetail,
    pub student: Student,
}

/// DTO for creating a new registration.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRegistration {
    pub class_id: DbId,
    pub student_id: DbId,
    pub registration_date: Option<NaiveDate>,
}

/// DTO for replacing an existing registration (full-record replace).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRegistration {
    pub class_id: DbId,
    pub student_id: DbId,
    pub registration_date: Option<NaiveDate>,
}
