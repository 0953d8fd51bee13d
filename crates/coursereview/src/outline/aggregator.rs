//! Finds the sections a named instructor teaches in a term.
//!
//! Walks department -> course -> section -> detail over a capped subset of
//! departments. Every branch is best effort: a failed course, section or
//! detail fetch skips that branch and the scan carries on with the rest.

use super::error::OutlineError;
use super::matcher::NameQuery;
use super::types::{Course, Department, InstructorCourseMatch, Section, SectionDetail, TermKey};
use super::OutlineApi;
use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

/// Departments scanned by default; anything outside this list is never searched.
pub const DEFAULT_DEPARTMENTS: &[&str] = &[
    "cmpt", "math", "macm", "stat", "bus", "econ", "phys", "chem", "bisc", "engl", "psyc", "crim",
];

/// Settings for the instructor course search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregatorConfig {
    pub year: String,
    pub term: String,
    /// Department allow-list (outline `value`s, compared case-insensitively)
    pub departments: Vec<String>,
    pub max_departments: usize,
    pub max_courses: usize,
    /// `classType` that marks the lecture-equivalent offering
    pub lecture_class_type: String,
    /// Section code prefix of lecture-equivalent offerings ("d" for D100)
    pub section_prefix: String,
    /// Departments scanned at once. 1 keeps the walk strictly sequential.
    pub concurrency: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            year: "2026".to_string(),
            term: "spring".to_string(),
            departments: DEFAULT_DEPARTMENTS.iter().map(|d| d.to_string()).collect(),
            max_departments: 10,
            max_courses: 20,
            lecture_class_type: "e".to_string(),
            section_prefix: "d".to_string(),
            concurrency: 1,
        }
    }
}

impl AggregatorConfig {
    /// Loads settings from a JSON file; missing fields keep their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let content = std::fs::read_to_string(path)?;
        let config: AggregatorConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn term_key(&self) -> TermKey {
        TermKey::new(&self.year, &self.term)
    }

    /// Returns true if the section is the primary lecture-like offering.
    pub fn is_lecture_section(&self, section: &Section) -> bool {
        let class_type_ok = section
            .class_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case(&self.lecture_class_type));
        let prefix_ok = section
            .value
            .to_lowercase()
            .starts_with(&self.section_prefix.to_lowercase());
        class_type_ok && prefix_ok
    }

    /// Filters the department list down to the allow-list, capped.
    pub fn select_departments(&self, departments: Vec<Department>) -> Vec<Department> {
        departments
            .into_iter()
            .filter(|d| {
                self.departments
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(&d.value))
            })
            .take(self.max_departments)
            .collect()
    }
}

/// Summary of one search, for logging.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    pub departments: usize,
    pub sections_checked: usize,
    pub skipped_branches: usize,
}

/// Drives an [`OutlineApi`] to find sections taught by an instructor.
pub struct InstructorCourseAggregator<'a> {
    api: &'a dyn OutlineApi,
    config: &'a AggregatorConfig,
    term: TermKey,
    sections_checked: AtomicUsize,
    skipped: AtomicUsize,
}

impl<'a> InstructorCourseAggregator<'a> {
    pub fn new(api: &'a dyn OutlineApi, config: &'a AggregatorConfig) -> Self {
        Self {
            api,
            config,
            term: config.term_key(),
            sections_checked: AtomicUsize::new(0),
            skipped: AtomicUsize::new(0),
        }
    }

    /// Searches the configured term for sections taught by `name`.
    ///
    /// Only the department list fetch can fail the search. Everything below
    /// it is skipped on error, so the result is whatever the healthy branches
    /// produced, possibly empty. Results are in filtered-list order and are
    /// not deduplicated.
    pub async fn find_courses(
        &self,
        name: &str,
    ) -> Result<(Vec<InstructorCourseMatch>, ScanStats), OutlineError> {
        let query = NameQuery::new(name);
        let departments = self.api.departments(&self.term).await?;
        let departments = self.config.select_departments(departments);
        let department_count = departments.len();

        let mut matches = Vec::new();
        if !query.is_empty() {
            let per_department: Vec<Vec<InstructorCourseMatch>> = stream::iter(departments)
                .map(|dept| self.scan_department(dept, &query))
                .buffered(self.config.concurrency.max(1))
                .collect()
                .await;
            matches = per_department.into_iter().flatten().collect();
        }

        let stats = ScanStats {
            departments: department_count,
            sections_checked: self.sections_checked.load(Ordering::Relaxed),
            skipped_branches: self.skipped.load(Ordering::Relaxed),
        };

        info!(
            term = %self.term,
            departments = stats.departments,
            sections_checked = stats.sections_checked,
            skipped_branches = stats.skipped_branches,
            matches = matches.len(),
            "Instructor course search finished"
        );

        Ok((matches, stats))
    }

    async fn scan_department(
        &self,
        dept: Department,
        query: &NameQuery,
    ) -> Vec<InstructorCourseMatch> {
        let mut matches = Vec::new();

        let courses = match self.api.courses(&self.term, &dept.value).await {
            Ok(courses) => courses,
            Err(e) => {
                self.skip(&e);
                return matches;
            }
        };

        for course in courses.into_iter().take(self.config.max_courses) {
            let sections = match self
                .api
                .sections(&self.term, &dept.value, &course.value)
                .await
            {
                Ok(sections) => sections,
                Err(e) => {
                    self.skip(&e);
                    continue;
                }
            };

            for section in sections
                .iter()
                .filter(|s| self.config.is_lecture_section(s))
            {
                self.sections_checked.fetch_add(1, Ordering::Relaxed);
                let detail = match self
                    .api
                    .section_detail(&self.term, &dept.value, &course.value, &section.value)
                    .await
                {
                    Ok(detail) => detail,
                    Err(e) => {
                        self.skip(&e);
                        continue;
                    }
                };

                if let Some(found) = build_match(&dept, &course, section, &detail, query) {
                    matches.push(found);
                }
            }
        }

        matches
    }

    fn skip(&self, error: &OutlineError) {
        debug!(error = %error, "Skipping outline branch");
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }
}

/// Builds a match from the first instructor on the section that the query accepts.
fn build_match(
    dept: &Department,
    course: &Course,
    section: &Section,
    detail: &SectionDetail,
    query: &NameQuery,
) -> Option<InstructorCourseMatch> {
    let instructor = detail.instructor.iter().find(|i| query.matches(&i.name))?;

    let schedule = detail
        .course_schedule
        .iter()
        .map(|entry| entry.describe())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("; ");

    let campus = detail
        .course_schedule
        .iter()
        .find_map(|entry| entry.campus.clone())
        .unwrap_or_default();

    let title = detail
        .info
        .title
        .clone()
        .or_else(|| section.title.clone())
        .or_else(|| course.title.clone())
        .unwrap_or_default();

    Some(InstructorCourseMatch {
        course_code: format!("{} {}", dept.text.to_uppercase(), course.text.to_uppercase()),
        section: section.text.to_uppercase(),
        title,
        schedule,
        campus,
        delivery_method: detail.info.delivery_method.clone().unwrap_or_default(),
        instructor: instructor.name.clone(),
    })
}
