//! Handlers for the `/api/students` resource.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use university_core::error::CoreError;
use university_core::types::DbId;
use university_db::models::student::{CreateStudent, Student, UpdateStudent};
use university_db::repositories::StudentRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/students
///
/// Returns all students, 404 when the table is empty.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Student>>> {
    let students = StudentRepo::list_all(&state.pool).await?;
    if students.is_empty() {
        return Err(AppError::Core(CoreError::NoRows { entity: "Student" }));
    }
    Ok(Json(students))
}

/// GET /api/students/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    Ok(Json(student))
}

/// POST /api/students
///
/// Returns 201 with the persisted row and a Location header pointing at
/// the get-by-id endpoint.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateStudent>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let student = StudentRepo::create(&state.pool, &input).await?;
    let location = format!("/api/students/{}", student.id);
    tracing::info!(student_id = student.id, "Student created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(student),
    ))
}

/// PUT /api/students/{id}
///
/// Full-record replace. The id comes from the path; 404 when absent.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStudent>,
) -> AppResult<StatusCode> {
    input.validate()?;
    StudentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    tracing::info!(student_id = id, "Student updated");
    Ok(StatusCode::ACCEPTED)
}

/// DELETE /api/students/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = StudentRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(student_id = id, "Student deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))
    }
}
