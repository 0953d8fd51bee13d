/// Types for the generated course success guide
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseGuide {
    pub course_code: String,
    pub profs: Vec<ProfessorSummary>,
    pub stats: CourseStats,
    pub syllabi: Vec<Syllabus>,
    pub focus: Vec<FocusTopic>,
    pub notes: Vec<NoteSummary>,
    pub reviews: Vec<AlumniReview>,
    pub resources: Vec<ResourceLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorSummary {
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub difficulty: f64,
    /// Formatted as "87%"
    pub would_take_again: String,
    pub tags: Vec<String>,
}

/// Grade buckets are drawn independently and do not sum to 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseStats {
    pub difficulty: f64,
    pub workload: f64,
    pub valuable: f64,
    pub grade_distribution: Vec<GradeBucket>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeBucket {
    pub grade: String,
    pub percent: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Syllabus {
    pub term: String,
    pub prof: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusTopic {
    pub topic: String,
    pub importance: String,
    pub tip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteSummary {
    pub title: String,
    pub author: String,
    pub upvotes: u32,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlumniReview {
    pub author: String,
    pub rating: u8,
    pub comment: String,
    pub semester: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceLink {
    pub title: String,
    pub url: String,
}
