//! Review and contribution intake.
//!
//! Submissions are logged and acknowledged, not stored. A review additionally
//! marks the submitting user as a contributor with the identity provider.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::reviews::{Contribution, Review};
use crate::server::types::ApiErrorType;
use crate::types::AppState;

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
}

/// Reads `userId` from a submission body.
///
/// Bodies are read leniently: a missing, empty or non-JSON body counts as `{}`.
/// Non-empty strings and non-zero numbers are accepted as ids.
fn submitted_user_id(body: &Value) -> Option<String> {
    match body.get("userId")? {
        Value::String(id) => Some(id.trim())
            .filter(|id| !id.is_empty())
            .map(str::to_string),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// POST /api/reviews
pub async fn post_review(State(s): State<Arc<AppState>>, body: Bytes) -> Response {
    let submission: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let Some(user_id) = submitted_user_id(&submission) else {
        return ApiErrorType::bad_request("User ID is required").into_response();
    };
    let review_data = submission.get("reviewData").cloned().unwrap_or(Value::Null);

    info!(
        user_id = %user_id,
        submitted_at = %Utc::now().to_rfc3339(),
        review = %review_data,
        "[REVIEW SUBMITTED]"
    );

    // Free-form payloads are accepted; a malformed structured review is only flagged.
    if let Ok(review) = serde_json::from_value::<Review>(review_data) {
        if let Err(e) = review.validate() {
            warn!(user_id = %user_id, "Submitted review fails validation: {}", e);
        }
    }

    match s
        .identity
        .update_public_metadata(&user_id, json!({ "hasContributed": true }))
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(SubmissionResponse {
                success: true,
                message: "Review submitted and account unlocked!".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Error submitting review: {}", e);
            ApiErrorType::internal("Failed to submit review").into_response()
        }
    }
}

/// POST /api/contributions
pub async fn post_contribution(Json(contribution): Json<Contribution>) -> Response {
    if let Err(e) = contribution.validate() {
        return ApiErrorType::bad_request(e.to_string()).into_response();
    }

    info!(
        course = %contribution.course_code,
        kind = ?contribution.kind,
        title = %contribution.title,
        author = %contribution.display_name(),
        submitted_at = %Utc::now().to_rfc3339(),
        "[CONTRIBUTION SUBMITTED]"
    );

    (
        StatusCode::OK,
        Json(SubmissionResponse {
            success: true,
            message: "Contribution received".to_string(),
        }),
    )
        .into_response()
}
