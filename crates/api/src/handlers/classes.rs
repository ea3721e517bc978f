//! Handlers for the `/api/classes` resource.
//!
//! Reads accept `?include=related` to eager-load the instructor and
//! course rows through an explicit join.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use university_core::error::CoreError;
use university_core::types::DbId;
use university_db::models::class::{CreateClass, UpdateClass};
use university_db::repositories::ClassRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::IncludeParams;
use crate::state::AppState;

/// GET /api/classes
///
/// Returns all classes, 404 when the table is empty. With
/// `?include=related`, each row embeds its instructor and course.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IncludeParams>,
) -> AppResult<Response> {
    if params.related() {
        let classes = ClassRepo::list_all_detail(&state.pool).await?;
        if classes.is_empty() {
            return Err(AppError::Core(CoreError::NoRows { entity: "Class" }));
        }
        Ok(Json(classes).into_response())
    } else {
        let classes = ClassRepo::list_all(&state.pool).await?;
        if classes.is_empty() {
            return Err(AppError::Core(CoreError::NoRows { entity: "Class" }));
        }
        Ok(Json(classes).into_response())
    }
}

/// GET /api/classes/{id}
///
/// With `?include=related`, the row embeds its instructor and course.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<IncludeParams>,
) -> AppResult<Response> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Class",
            id,
        })
    };
    if params.related() {
        let class = ClassRepo::find_detail_by_id(&state.pool, id)
            .await?
            .ok_or_else(not_found)?;
        Ok(Json(class).into_response())
    } else {
        let class = ClassRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or_else(not_found)?;
        Ok(Json(class).into_response())
    }
}

/// POST /api/classes
///
/// `instructor_id` and `course_id` must reference existing rows; a
/// dangling reference is a persistence failure and surfaces as 500.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateClass>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let class = ClassRepo::create(&state.pool, &input).await?;
    let location = format!("/api/classes/{}", class.id);
    tracing::info!(class_id = class.id, "Class created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(class),
    ))
}

/// PUT /api/classes/{id}
///
/// Full-record replace. The id comes from the path; 404 when absent.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateClass>,
) -> AppResult<StatusCode> {
    input.validate()?;
    ClassRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Class",
            id,
        }))?;
    tracing::info!(class_id = id, "Class updated");
    Ok(StatusCode::ACCEPTED)
}

/// DELETE /api/classes/{id}
///
/// Dependent registrations (and their grades) are removed by the
/// database's cascade rules.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ClassRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(class_id = id, "Class deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Class",
            id,
        }))
    }
}
