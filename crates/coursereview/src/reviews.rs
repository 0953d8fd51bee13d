//! Review and contribution payloads and their validation rules.
//!
//! Nothing here is persisted. Submissions are validated, logged and acknowledged.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Minimum review text length when text is given at all.
pub const MIN_REVIEW_TEXT_LEN: usize = 30;
pub const MAX_WORKLOAD_HOURS: u8 = 30;
/// Largest accepted notes upload.
pub const MAX_NOTES_SIZE: u64 = 10 * 1024 * 1024;

pub const ALLOWED_NOTE_TYPES: &[&str] = &[
    "application/pdf",
    "image/png",
    "image/jpeg",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select an overall rating")]
    MissingRating,

    #[error("Please select a difficulty level")]
    MissingDifficulty,

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u8,
        max: u8,
    },

    #[error("Review must be at least 30 characters (or leave empty)")]
    ReviewTooShort,

    #[error("{0} is required")]
    Required(&'static str),

    #[error("Please enter a valid URL starting with http:// or https://")]
    InvalidUrl,

    #[error("File type not allowed. Use PDF, PNG, JPG, DOC, or DOCX.")]
    FileTypeNotAllowed,

    #[error("File too large. Maximum size is 10 MB.")]
    FileTooLarge,
}

/// A course review as the review form submits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub course_code: Option<String>,
    pub term: String,
    pub overall_rating: u8,
    pub difficulty: u8,
    pub workload_hours: u8,
    /// None when the reviewer did not answer
    #[serde(default)]
    pub would_take_again: Option<bool>,
    #[serde(default)]
    pub review_text: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
}

impl Review {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.overall_rating == 0 {
            return Err(ValidationError::MissingRating);
        }
        if self.overall_rating > 5 {
            return Err(ValidationError::OutOfRange {
                field: "Overall rating",
                min: 1,
                max: 5,
            });
        }
        if self.difficulty == 0 {
            return Err(ValidationError::MissingDifficulty);
        }
        if self.difficulty > 5 {
            return Err(ValidationError::OutOfRange {
                field: "Difficulty",
                min: 1,
                max: 5,
            });
        }
        if self.workload_hours > MAX_WORKLOAD_HOURS {
            return Err(ValidationError::OutOfRange {
                field: "Workload hours",
                min: 0,
                max: MAX_WORKLOAD_HOURS,
            });
        }
        if let Some(text) = self.review_text.as_deref() {
            let len = text.chars().count();
            if len > 0 && len < MIN_REVIEW_TEXT_LEN {
                return Err(ValidationError::ReviewTooShort);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionKind {
    Tip,
    Resource,
    Notes,
}

/// Metadata of an uploaded notes file. The bytes themselves are not handled here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

/// A tip, resource link or notes upload for a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub course_code: String,
    #[serde(rename = "type")]
    pub kind: ContributionKind,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub file: Option<NoteFile>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Contribution {
    pub fn display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("Anonymous")
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.course_code.trim().is_empty() {
            return Err(ValidationError::Required("Course code"));
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::Required("Title"));
        }

        match self.kind {
            ContributionKind::Tip => {
                if self.body.as_deref().map_or(true, |b| b.trim().is_empty()) {
                    return Err(ValidationError::Required("Body"));
                }
            }
            ContributionKind::Resource => {
                let raw = self
                    .url
                    .as_deref()
                    .map(str::trim)
                    .filter(|u| !u.is_empty())
                    .ok_or(ValidationError::Required("URL"))?;
                if !is_web_url(raw) {
                    return Err(ValidationError::InvalidUrl);
                }
            }
            ContributionKind::Notes => {
                let file = self.file.as_ref().ok_or(ValidationError::Required("File"))?;
                if !ALLOWED_NOTE_TYPES.contains(&file.mime_type.as_str()) {
                    return Err(ValidationError::FileTypeNotAllowed);
                }
                if file.size > MAX_NOTES_SIZE {
                    return Err(ValidationError::FileTooLarge);
                }
            }
        }

        Ok(())
    }
}

fn is_web_url(raw: &str) -> bool {
    Url::parse(raw)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
        .unwrap_or(false)
}
