//! Pass-through endpoints for the professor ratings service.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{error, info};

use super::NameQueryParams;
use crate::server::types::ApiErrorType;
use crate::types::AppState;

/// GET /api/professors/search?name=
pub async fn get_search(
    State(s): State<Arc<AppState>>,
    Query(params): Query<NameQueryParams>,
) -> Response {
    let Some(name) = params.name() else {
        return ApiErrorType::bad_request("Name parameter is required").into_response();
    };

    info!("GET /api/professors/search?name={}", name);

    match s.ratings.search_teacher(name).await {
        Ok(professors) => (StatusCode::OK, Json(professors)).into_response(),
        Err(e) => {
            error!("Error searching professors: {}", e);
            ApiErrorType::internal("Failed to search professors").into_response()
        }
    }
}

/// GET /api/professors/:id
pub async fn get_professor(
    Path(id): Path<String>,
    State(s): State<Arc<AppState>>,
) -> Response {
    info!("GET /api/professors/{}", id);

    match s.ratings.get_teacher(&id).await {
        Ok(professor) => (StatusCode::OK, Json(professor)).into_response(),
        Err(e) => {
            error!("Error getting professor details: {}", e);
            ApiErrorType::internal("Failed to get professor details").into_response()
        }
    }
}
