//! Handlers for the `/api/registrations` resource.
//!
//! Reads accept `?include=related` to eager-load the student and the
//! full class chain (class -> instructor, class -> course) through an
//! explicit join.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use university_core::error::CoreError;
use university_core::types::DbId;
use university_db::models::registration::{CreateRegistration, UpdateRegistration};
use university_db::repositories::RegistrationRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::IncludeParams;
use crate::state::AppState;

/// GET /api/registrations
///
/// Returns all registrations, 404 when the table is empty. With
/// `?include=related`, each row embeds its student and class detail.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IncludeParams>,
) -> AppResult<Response> {
    if params.related() {
        let registrations = RegistrationRepo::list_all_detail(&state.pool).await?;
        if registrations.is_empty() {
            return Err(AppError::Core(CoreError::NoRows {
                entity: "Registration",
            }));
        }
        Ok(Json(registrations).into_response())
    } else {
        let registrations = RegistrationRepo::list_all(&state.pool).await?;
        if registrations.is_empty() {
            return Err(AppError::Core(CoreError::NoRows {
                entity: "Registration",
            }));
        }
        Ok(Json(registrations).into_response())
    }
}

/// GET /api/registrations/{id}
///
/// With `?include=related`, the row embeds its student and class detail.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<IncludeParams>,
) -> AppResult<Response> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Registration",
            id,
        })
    };
    if params.related() {
        let registration = RegistrationRepo::find_detail_by_id(&state.pool, id)
            .await?
            .ok_or_else(not_found)?;
        Ok(Json(registration).into_response())
    } else {
        let registration = RegistrationRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or_else(not_found)?;
        Ok(Json(registration).into_response())
    }
}

/// POST /api/registrations
///
/// `class_id` and `student_id` must reference existing rows; a dangling
/// reference is a persistence failure and surfaces as 500.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateRegistration>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let registration = RegistrationRepo::create(&state.pool, &input).await?;
    let location = format!("/api/registrations/{}", registration.id);
    tracing::info!(registration_id = registration.id, "Registration created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(registration),
    ))
}

/// PUT /api/registrations/{id}
///
/// Full-record replace. The id comes from the path; 404 when absent.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRegistration>,
) -> AppResult<StatusCode> {
    input.validate()?;
    RegistrationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Registration",
            id,
        }))?;
    tracing::info!(registration_id = id, "Registration updated");
    Ok(StatusCode::ACCEPTED)
}

/// DELETE /api/registrations/{id}
///
/// Dependent grades are removed by the database's cascade rules.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = RegistrationRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(registration_id = id, "Registration deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Registration",
            id,
        }))
    }
}
