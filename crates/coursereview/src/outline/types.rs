/// Types for course outline API responses
use serde::{Deserialize, Serialize};

/// Year and term that every outline path starts with, e.g. `2026/spring`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermKey {
    pub year: String,
    pub term: String,
}

impl TermKey {
    pub fn new(year: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            term: term.into(),
        }
    }
}

impl std::fmt::Display for TermKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.year, self.term)
    }
}

/// One department entry, e.g. `{"text": "CMPT", "value": "cmpt", "name": "Computing Science"}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub text: String,
    pub value: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub text: String,
    pub value: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub text: String,
    pub value: String,
    #[serde(default)]
    pub title: Option<String>,

    /// "e" for the enrollable (lecture-equivalent) offering, "n" for tutorials/labs
    #[serde(rename = "classType", default)]
    pub class_type: Option<String>,

    /// Delivery type such as "LEC", "TUT", "LAB"
    #[serde(rename = "sectionCode", default)]
    pub section_code: Option<String>,

    #[serde(rename = "associatedClass", default)]
    pub associated_class: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionDetail {
    #[serde(default)]
    pub info: SectionInfo,

    #[serde(default)]
    pub instructor: Vec<Instructor>,

    #[serde(rename = "courseSchedule", default)]
    pub course_schedule: Vec<ScheduleEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub dept: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(rename = "deliveryMethod", default)]
    pub delivery_method: Option<String>,
}

/// An instructor listed on a section. The outline API exposes no stable id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Instructor {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "roleCode", default)]
    pub role_code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[serde(default)]
    pub campus: Option<String>,
    #[serde(default)]
    pub days: Option<String>,
    #[serde(rename = "startTime", default)]
    pub start_time: Option<String>,
    #[serde(rename = "endTime", default)]
    pub end_time: Option<String>,
}

impl ScheduleEntry {
    /// Formats the entry as "Mo, We 10:30-11:20". Empty when nothing is scheduled.
    pub fn describe(&self) -> String {
        let days = self.days.as_deref().unwrap_or("").trim();
        let time = match (self.start_time.as_deref(), self.end_time.as_deref()) {
            (Some(start), Some(end)) => format!("{}-{}", start, end),
            (Some(start), None) => start.to_string(),
            _ => String::new(),
        };

        match (days.is_empty(), time.is_empty()) {
            (true, true) => String::new(),
            (false, true) => days.to_string(),
            (true, false) => time,
            (false, false) => format!("{} {}", days, time),
        }
    }
}

/// A section taught by the searched-for instructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorCourseMatch {
    pub course_code: String,
    pub section: String,
    pub title: String,
    pub schedule: String,
    pub campus: String,
    pub delivery_method: String,
    pub instructor: String,
}
