pub mod classes;
pub mod courses;
pub mod health;
pub mod instructors;
pub mod registrations;
pub mod students;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /students                 list, create
/// /students/{id}            get, update, delete
/// /instructors              list, create
/// /instructors/{id}         get, update, delete
/// /courses                  list, create
/// /courses/{id}             get, update, delete
/// /classes                  list (?include=related), create
/// /classes/{id}             get (?include=related), update, delete
/// /registrations            list (?include=related), create
/// /registrations/{id}       get (?include=related), update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/students", students::router())
        .nest("/instructors", instructors::router())
        .nest("/courses", courses::router())
        .nest("/classes", classes::router())
        .nest("/registrations", registrations::router())
}
