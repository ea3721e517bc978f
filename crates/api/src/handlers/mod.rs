//! Request handlers for the university entities.
//!
//! Each submodule provides async handler functions (list, get_by_id,
//! create, update, delete) for a single resource. Handlers delegate to
//! the corresponding repository in `university_db` and map errors via
//! [`crate::error::AppError`]; any unexpected persistence failure
//! surfaces to the caller as an opaque 500.

pub mod classes;
pub mod courses;
pub mod instructors;
pub mod registrations;
pub mod students;
