//! Grade period entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use university_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `grade_periods` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GradePeriod {
    pub id: DbId,
    pub period: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new grade period.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGradePeriod {
    #[validate(length(max = 100))]
    pub period: String,
}

/// DTO for replacing an existing grade period (full-record replace).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateGradePeriod {
    #[validate(length(max = 100))]
    pub period: String,
}
