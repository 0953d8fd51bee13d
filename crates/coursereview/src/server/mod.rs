use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::server::endpoints::{guide, instructor_courses, professors, reviews, status};
use crate::types::AppState;

mod endpoints;
mod types;

pub use types::ApiErrorType;

/// Creates a router that can be used by `axum`.
///
/// # Parameters
/// - `app_state`: The app server state.
///
/// # Returns
/// The router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .route("/professors/search", get(professors::get_search))
        .route("/professors/:id", get(professors::get_professor))
        .route("/reviews", post(reviews::post_review))
        .route("/contributions", post(reviews::post_contribution))
        .route(
            "/instructor-courses",
            get(instructor_courses::get_instructor_courses),
        )
        .route("/courses/:code/guide", get(guide::get_course_guide));

    Router::new()
        .route("/health", get(status::get_health))
        .nest("/api", api_router)
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::identity::{IdentityError, IdentityProvider};
    use crate::outline::testing::StubOutline;
    use crate::ratings::{RatingsError, RatingsProvider, School, Teacher, TeacherSearchResult};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tower::ServiceExt;

    struct StubRatings {
        fail: bool,
    }

    fn school() -> School {
        School {
            id: "U2Nob29sLTE0ODI=".to_string(),
            name: "Simon Fraser University".to_string(),
            city: None,
            state: None,
        }
    }

    #[async_trait::async_trait]
    impl RatingsProvider for StubRatings {
        async fn search_teacher(&self, name: &str) -> Result<Vec<TeacherSearchResult>, RatingsError> {
            if self.fail {
                return Err(RatingsError::UnexpectedStatus { status: 502 });
            }
            Ok(vec![TeacherSearchResult {
                id: "VGVhY2hlci0x".to_string(),
                first_name: "Diana".to_string(),
                last_name: name.to_string(),
                school: school(),
            }])
        }

        async fn get_teacher(&self, id: &str) -> Result<Teacher, RatingsError> {
            if self.fail {
                return Err(RatingsError::NotFound { id: id.to_string() });
            }
            Ok(Teacher {
                id: id.to_string(),
                first_name: "Diana".to_string(),
                last_name: "Cukierman".to_string(),
                avg_difficulty: 3.1,
                avg_rating: 4.2,
                num_ratings: 120,
                department: "Computer Science".to_string(),
                school: school(),
                legacy_id: 12345,
                would_take_again_percent: 81.5,
            })
        }
    }

    #[derive(Default)]
    struct StubIdentity {
        calls: AtomicUsize,
        last_user: Mutex<Option<String>>,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl IdentityProvider for StubIdentity {
        async fn update_public_metadata(&self, user_id: &str, metadata: Value) -> Result<(), IdentityError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_user.lock().unwrap() = Some(user_id.to_string());
            assert_eq!(metadata, json!({ "hasContributed": true }));
            if self.fail {
                return Err(IdentityError::NotConfigured);
            }
            Ok(())
        }
    }

    struct Harness {
        router: Router,
        identity: Arc<StubIdentity>,
    }

    fn harness_with(outline: StubOutline, ratings_fail: bool, identity: StubIdentity) -> Harness {
        let identity = Arc::new(identity);
        let state = AppState {
            config: Config::default(),
            outline: Arc::new(outline),
            ratings: Arc::new(StubRatings { fail: ratings_fail }),
            identity: identity.clone(),
        };
        Harness {
            router: create_router(Arc::new(state)),
            identity,
        }
    }

    fn harness() -> Harness {
        harness_with(StubOutline::default(), false, StubIdentity::default())
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(harness().router, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_search_requires_name() {
        for uri in ["/api/professors/search", "/api/professors/search?name=", "/api/professors/search?other=x"] {
            let (status, body) = send(harness().router, get(uri)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {}", uri);
            assert_eq!(body["error"], "Name parameter is required");
        }
    }

    #[tokio::test]
    async fn test_search_passes_results_through() {
        let (status, body) = send(harness().router, get("/api/professors/search?name=Cukierman")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["lastName"], "Cukierman");
        assert_eq!(body[0]["school"]["name"], "Simon Fraser University");
    }

    #[tokio::test]
    async fn test_search_upstream_failure_is_generic_500() {
        let h = harness_with(StubOutline::default(), true, StubIdentity::default());
        let (status, body) = send(h.router, get("/api/professors/search?name=Fraser")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to search professors" }));
    }

    #[tokio::test]
    async fn test_get_professor() {
        let (status, body) = send(harness().router, get("/api/professors/VGVhY2hlci0x")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "VGVhY2hlci0x");
        assert_eq!(body["avgRating"], 4.2);

        let h = harness_with(StubOutline::default(), true, StubIdentity::default());
        let (status, _) = send(h.router, get("/api/professors/missing")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_review_without_user_never_calls_identity() {
        let h = harness();
        let (status, body) = send(
            h.router.clone(),
            post_json("/api/reviews", json!({ "userId": "", "reviewData": { "term": "Spring 2026" } })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "User ID is required");

        let (status, _) = send(h.router, post_json("/api/reviews", json!({ "reviewData": {} }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        assert_eq!(h.identity.calls.load(Ordering::SeqCst), 0);
    }

    fn post_raw(uri: &str, content_type: Option<&str>, body: &'static str) -> Request<Body> {
        let mut builder = Request::builder().method("POST").uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_review_unusable_bodies_are_400() {
        let h = harness();
        let requests = [
            post_raw("/api/reviews", None, ""),
            post_raw("/api/reviews", Some("application/json"), ""),
            post_raw("/api/reviews", Some("application/json"), "null"),
            post_raw("/api/reviews", Some("application/json"), "{not json"),
            post_raw("/api/reviews", Some("application/json"), r#"{"userId": 0}"#),
            post_raw("/api/reviews", Some("application/json"), r#"{"userId": null}"#),
            post_raw("/api/reviews", Some("application/json"), r#"{"userId": "   "}"#),
            post_raw("/api/reviews", Some("text/plain"), r#"{"userId": false}"#),
        ];

        for request in requests {
            let (status, body) = send(h.router.clone(), request).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "User ID is required");
        }

        assert_eq!(h.identity.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_review_numeric_user_id_is_accepted() {
        let h = harness();
        let (status, body) = send(
            h.router,
            post_raw("/api/reviews", Some("application/json"), r#"{"userId": 123}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(h.identity.last_user.lock().unwrap().as_deref(), Some("123"));
    }

    #[tokio::test]
    async fn test_review_marks_user_as_contributor() {
        let h = harness();
        let review = json!({
            "userId": "user_2abc",
            "reviewData": {
                "term": "Spring 2026",
                "overall_rating": 4,
                "difficulty": 3,
                "workload_hours": 12,
                "would_take_again": true,
                "review_text": null,
                "instructor": "Diana Cukierman"
            }
        });

        let (status, body) = send(h.router, post_json("/api/reviews", review)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Review submitted and account unlocked!");
        assert_eq!(h.identity.calls.load(Ordering::SeqCst), 1);
        assert_eq!(h.identity.last_user.lock().unwrap().as_deref(), Some("user_2abc"));
    }

    #[tokio::test]
    async fn test_review_identity_failure_is_500() {
        let identity = StubIdentity {
            fail: true,
            ..Default::default()
        };
        let h = harness_with(StubOutline::default(), false, identity);
        let (status, body) = send(
            h.router,
            post_json("/api/reviews", json!({ "userId": "user_1", "reviewData": "free text" })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to submit review" }));
    }

    #[tokio::test]
    async fn test_contribution_validation() {
        let tip = json!({
            "courseCode": "CMPT 225",
            "type": "tip",
            "title": "Debug Test Tip",
            "body": "This is a test tip with at least 15 characters to pass validation.",
            "displayName": "Debugger"
        });
        let (status, body) = send(harness().router, post_json("/api/contributions", tip)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let bad_link = json!({
            "courseCode": "CMPT 225",
            "type": "resource",
            "title": "Slides",
            "url": "javascript:alert(1)"
        });
        let (status, body) = send(harness().router, post_json("/api/contributions", bad_link)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Please enter a valid URL starting with http:// or https://"
        );
    }

    #[tokio::test]
    async fn test_instructor_courses_requires_name() {
        let (status, _) = send(harness().router, get("/api/instructor-courses")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_instructor_courses_end_to_end() {
        let outline = StubOutline::default()
            .with_section("cmpt", "120", "Diana Cukierman")
            .with_section("cmpt", "225", "Brian Fraser");
        let h = harness_with(outline, false, StubIdentity::default());

        let (status, body) = send(h.router, get("/api/instructor-courses?name=Cukierman")).await;

        assert_eq!(status, StatusCode::OK);
        let matches = body.as_array().unwrap();
        assert_eq!(matches.len(), 1);
        assert!(matches[0]["instructor"].as_str().unwrap().contains("Cukierman"));
        assert_eq!(matches[0]["courseCode"], "CMPT 120");
        assert_eq!(matches[0]["deliveryMethod"], "In Person");
    }

    #[tokio::test]
    async fn test_instructor_courses_department_list_failure() {
        let outline = StubOutline::default().failing("");
        let h = harness_with(outline, false, StubIdentity::default());

        let (status, body) = send(h.router, get("/api/instructor-courses?name=Cukierman")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to fetch instructor courses");
    }

    #[tokio::test]
    async fn test_course_guide() {
        let (status, body) = send(harness().router, get("/api/courses/CMPT%20225/guide")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["courseCode"], "CMPT 225");
        assert_eq!(body["stats"]["gradeDistribution"].as_array().unwrap().len(), 4);
    }
}
