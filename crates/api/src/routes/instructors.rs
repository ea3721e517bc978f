//! Route definitions for the instructors resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::instructors;
use crate::state::AppState;

/// Routes mounted at `/instructors`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(instructors::list).post(instructors::create))
        .route(
            "/{id}",
            get(instructors::get_by_id)
                .put(instructors::update)
                .delete(instructors::delete),
        )
}
