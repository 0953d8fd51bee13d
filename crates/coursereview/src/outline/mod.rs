//! Course outline API access and the instructor course search built on it.

mod aggregator;
mod client;
mod error;
mod matcher;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use aggregator::{AggregatorConfig, InstructorCourseAggregator, ScanStats, DEFAULT_DEPARTMENTS};
pub use client::{OutlineClient, OUTLINE_BASE_URL};
pub use error::OutlineError;
pub use matcher::{name_matches, normalize_name, NameQuery};
pub use types::*;

/// Read-only access to the hierarchical outline API.
///
/// Every method is exactly one upstream request. Errors are returned to the
/// caller, which decides whether they are fatal or skippable.
#[async_trait::async_trait]
pub trait OutlineApi: Send + Sync {
    /// Lists the departments offering courses in the term.
    async fn departments(&self, term: &TermKey) -> Result<Vec<Department>, OutlineError>;

    /// Lists a department's courses.
    async fn courses(&self, term: &TermKey, dept: &str) -> Result<Vec<Course>, OutlineError>;

    /// Lists a course's sections (lectures, tutorials, labs).
    async fn sections(
        &self,
        term: &TermKey,
        dept: &str,
        course: &str,
    ) -> Result<Vec<Section>, OutlineError>;

    /// Fetches one section's outline, including its instructors and schedule.
    async fn section_detail(
        &self,
        term: &TermKey,
        dept: &str,
        course: &str,
        section: &str,
    ) -> Result<SectionDetail, OutlineError>;
}
