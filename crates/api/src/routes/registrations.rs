//! Route definitions for the registrations resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::registrations;
use crate::state::AppState;

/// Routes mounted at `/registrations`.
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
        .route("/", get(registrations::list).post(registrations::create))
        .route(
            "/{id}",
            get(registrations::get_by_id)
                .put(registrations::update)
                .delete(registrations::delete),
        )
}
