pub mod guide;
pub mod instructor_courses;
pub mod professors;
pub mod reviews;
pub mod status;

use serde::Deserialize;

/// `?name=` query shared by the search endpoints.
#[derive(Debug, Deserialize)]
pub struct NameQueryParams {
    pub name: Option<String>,
}

impl NameQueryParams {
    /// The trimmed name, or None when missing or blank.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}
