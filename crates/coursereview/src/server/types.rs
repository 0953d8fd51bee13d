use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ApiErrorType {
    #[serde(skip)]
    status: StatusCode,
    error: String,
}

impl ApiErrorType {
    /// 400 with a static message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::from((StatusCode::BAD_REQUEST, message))
    }

    /// 500 with a static message. Upstream detail is logged, never returned.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::from((StatusCode::INTERNAL_SERVER_ERROR, message))
    }
}

impl<S: Into<String>> From<(StatusCode, S)> for ApiErrorType {
    fn from((status, error): (StatusCode, S)) -> Self {
        Self {
            status,
            error: error.into(),
        }
    }
}

impl IntoResponse for ApiErrorType {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
