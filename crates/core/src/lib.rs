//! Shared types and error definitions for the university API.

pub mod error;
pub mod types;
