use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::guide::generate_course_guide;
use crate::server::types::ApiErrorType;

/// GET /api/courses/:code/guide
///
/// Generated placeholder data; values change on every call.
pub async fn get_course_guide(Path(code): Path<String>) -> Response {
    let code = code.trim();
    if code.is_empty() {
        return ApiErrorType::bad_request("Course code is required").into_response();
    }

    info!("GET /api/courses/{}/guide", code);

    let guide = generate_course_guide(code, &mut rand::thread_rng());
    (StatusCode::OK, Json(guide)).into_response()
}
