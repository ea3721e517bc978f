//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Eager-load selector (`?include=related`).
///
/// Reads on classes and registrations return flat rows with foreign-key
/// ids by default; `include=related` switches to the joined detail shape
/// with related entities embedded.
#[derive(Debug, Deserialize)]
pub struct IncludeParams {
    pub include: Option<Include>,
}

/// Legal values of the `include` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Include {
    Related,
}

impl IncludeParams {
    /// True when the caller asked for related entities to be embedded.
    pub fn related(&self) -> bool {
        self.include == Some(Include::Related)
    }
}
