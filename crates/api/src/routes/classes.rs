//! Route definitions for the classes resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::classes;
use crate::state::AppState;

/// Routes mounted at `/classes`.
///
/// ```text
/// GET    /        -> list (?include=related)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id (?include=related)
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(classes::list).post(classes::create))
        .route(
            "/{id}",
            get(classes::get_by_id)
                .put(classes::update)
                .delete(classes::delete),
        )
}
