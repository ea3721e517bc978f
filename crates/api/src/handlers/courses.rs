//! Handlers for the `/api/courses` resource.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use university_core::error::CoreError;
use university_core::types::DbId;
use university_db::models::course::{Course, CreateCourse, UpdateCourse};
use university_db::repositories::CourseRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/courses
///
/// Returns all courses, 404 when the table is empty.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Course>>> {
    let courses = CourseRepo::list_all(&state.pool).await?;
    if courses.is_empty() {
        return Err(AppError::Core(CoreError::NoRows { entity: "Course" }));
    }
    Ok(Json(courses))
}

/// GET /api/courses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Course>> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    Ok(Json(course))
}

/// POST /api/courses
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCourse>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let course = CourseRepo::create(&state.pool, &input).await?;
    let location = format!("/api/courses/{}", course.id);
    tracing::info!(course_id = course.id, "Course created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(course),
    ))
}

/// PUT /api/courses/{id}
///
/// Full-record replace. The id comes from the path; 404 when absent.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCourse>,
) -> AppResult<StatusCode> {
    input.validate()?;
    CourseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    tracing::info!(course_id = id, "Course updated");
    Ok(StatusCode::ACCEPTED)
}

/// DELETE /api/courses/{id}
///
/// Dependent classes (and their registrations and grades) are removed by
/// the database's cascade rules.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = CourseRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(course_id = id, "Course deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))
    }
}
