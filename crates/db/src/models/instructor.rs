//! Instructor entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use university_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `instructors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Instructor {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub hourly_rate: Option<Decimal>,
    pub certificates: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new instructor.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInstructor {
    #[validate(length(max = 150))]
    pub name: String,
    #[validate(length(max = 50))]
    pub email: String,
    #[validate(length(max = 50))]
    pub phone: String,
    pub hourly_rate: Option<Decimal>,
    #[validate(length(max = 255))]
    pub certificates: Option<String>,
}

/// DTO for replacing an existing instructor (full-record replace).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateInstructor {
    #[validate(length(max = 150))]
    pub name: String,
    #[validate(length(max = 50))]
    pub email: String,
    #[validate(length(max = 50))]
    pub phone: String,
    pub hourly_rate: Option<Decimal>,
    #[validate(length(max = 255))]
    pub certificates: Option<String>,
}
