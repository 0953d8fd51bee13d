//! Professor ratings lookup.
//!
//! Results are passed through to the frontend as-is, so the types mirror the
//! ratings service's own field names.

mod client;

pub use client::{RateMyProfessorsClient, RATINGS_API_URL, SCHOOL_ID};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the ratings service.
#[derive(Debug, Error)]
pub enum RatingsError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Ratings service returned status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("Ratings query failed: {message}")]
    Query { message: String },

    #[error("No teacher with id {id}")]
    NotFound { id: String },
}

impl From<reqwest::Error> for RatingsError {
    fn from(err: reqwest::Error) -> Self {
        RatingsError::Network {
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// One hit from a name search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherSearchResult {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub school: School,
}

/// Full teacher record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub avg_difficulty: f64,
    #[serde(default)]
    pub avg_rating: f64,
    #[serde(default)]
    pub num_ratings: u32,
    #[serde(default)]
    pub department: String,
    pub school: School,
    #[serde(default)]
    pub legacy_id: u64,
    /// -1 when the service has no data
    #[serde(default)]
    pub would_take_again_percent: f64,
}

/// Lookup backend for professor ratings.
#[async_trait::async_trait]
pub trait RatingsProvider: Send + Sync {
    /// Searches teachers by free-text name within the configured school.
    async fn search_teacher(&self, name: &str) -> Result<Vec<TeacherSearchResult>, RatingsError>;

    /// Fetches a teacher by the service's opaque id.
    async fn get_teacher(&self, id: &str) -> Result<Teacher, RatingsError>;
}
