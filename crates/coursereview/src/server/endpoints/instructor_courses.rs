use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{error, info};

use super::NameQueryParams;
use crate::outline::InstructorCourseAggregator;
use crate::server::types::ApiErrorType;
use crate::types::AppState;

/// GET /api/instructor-courses?name=
///
/// Lists this term's lecture sections taught by the named instructor.
/// Branch failures upstream only shrink the result; the request fails only if
/// the department list itself cannot be fetched.
pub async fn get_instructor_courses(
    State(s): State<Arc<AppState>>,
    Query(params): Query<NameQueryParams>,
) -> Response {
    let Some(name) = params.name() else {
        return ApiErrorType::bad_request("Name parameter is required").into_response();
    };

    info!("GET /api/instructor-courses?name={}", name);

    let aggregator = InstructorCourseAggregator::new(s.outline.as_ref(), &s.config.aggregator);
    match aggregator.find_courses(name).await {
        Ok((matches, _)) => (StatusCode::OK, Json(matches)).into_response(),
        Err(e) => {
            error!("Error fetching instructor courses: {}", e);
            ApiErrorType::internal("Failed to fetch instructor courses").into_response()
        }
    }
}
