//! Student entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use university_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    /// National identity document, unique per student.
    pub cpf: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birthday: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new student.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStudent {
    #[validate(length(max = 18))]
    pub cpf: String,
    #[validate(length(max = 150))]
    pub name: String,
    #[validate(length(max = 50))]
    pub email: String,
    #[validate(length(max = 14))]
    pub phone: String,
    pub birthday: Option<NaiveDate>,
}

/// DTO for replacing an existing student.
///
/// Every client-owned field is required: a PUT replaces the whole record,
/// so an omitted field is a deserialization error, never a silent NULL.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStudent {
    #[validate(length(max = 18))]
    pub cpf: String,
    #[validate(length(max = 150))]
    pub name: String,
    #[validate(length(max = 50))]
    pub email: String,
    #[validate(length(max = 14))]
    pub phone: String,
    pub birthday: Option<NaiveDate>,
}
