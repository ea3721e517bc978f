//! Course entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use university_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub name: String,
    pub requirement: Option<String>,
    pub workload_hours: Option<i32>,
    pub price: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new course.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCourse {
    #[validate(length(max = 150))]
    pub name: String,
    #[validate(length(max = 250))]
    pub requirement: Option<String>,
    pub workload_hours: Option<i32>,
    pub price: Decimal,
}

/// DTO for replacing an existing course (full-record replace).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCourse {
    #[validate(length(max = 150))]
    pub name: String,
    #[validate(length(max = 250))]
    pub requirement: Option<String>,
    pub workload_hours: Option<i32>,
    pub price: Decimal,
}
