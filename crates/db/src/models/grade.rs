//! Grade entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use university_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `grades` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Grade {
    pub id: DbId,
    pub value: Decimal,
    pub registration_id: DbId,
    pub grade_period_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new grade.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGrade {
    pub value: Decimal,
    pub registration_id: DbId,
    pub grade_period_id: DbId,
}

/// DTO for replacing an existing grade (full-record replace).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateGrade {
    pub value: Decimal,
    pub registration_id: DbId,
    pub grade_period_id: DbId,
}
