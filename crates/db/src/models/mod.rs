//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO for full-record replaces
//!
//! Updates are whole-record replaces, so update DTOs carry the same
//! required fields as the create DTOs rather than `Option` patches.

pub mod class;
pub mod course;
pub mod grade;
pub mod grade_period;
pub mod instructor;
pub mod registration;
pub mod student;
