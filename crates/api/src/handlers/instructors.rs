//! Handlers for the `/api/instructors` resource.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use university_core::error::CoreError;
use university_core::types::DbId;
use university_db::models::instructor::{CreateInstructor, Instructor, UpdateInstructor};
use university_db::repositories::InstructorRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/instructors
///
/// Returns all instructors, 404 when the table is empty.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Instructor>>> {
    let instructors = InstructorRepo::list_all(&state.pool).await?;
    if instructors.is_empty() {
        return Err(AppError::Core(CoreError::NoRows {
            entity: "Instructor",
        }));
    }
    Ok(Json(instructors))
}

/// GET /api/instructors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Instructor>> {
    let instructor = InstructorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Instructor",
            id,
        }))?;
    Ok(Json(instructor))
}

/// POST /api/instructors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInstructor>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let instructor = InstructorRepo::create(&state.pool, &input).await?;
    let location = format!("/api/instructors/{}", instructor.id);
    tracing::info!(instructor_id = instructor.id, "Instructor created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(instructor),
    ))
}

/// PUT /api/instructors/{id}
///
/// Full-record replace. The id comes from the path; 404 when absent.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInstructor>,
) -> AppResult<StatusCode> {
    input.validate()?;
    InstructorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Instructor",
            id,
        }))?;
    tracing::info!(instructor_id = id, "Instructor updated");
    Ok(StatusCode::ACCEPTED)
}

/// DELETE /api/instructors/{id}
///
/// Dependent classes (and their registrations and grades) are removed by
/// the database's cascade rules.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = InstructorRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(instructor_id = id, "Instructor deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Instructor",
            id,
        }))
    }
}
