pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::errors::AppError;
use crate::profile::handlers as profile;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile capture
        .route(
            "/api/v1/profile/options",
            get(profile::handle_profile_options),
        )
        .route(
            "/api/v1/profile",
            get(profile::handle_get_profile)
                .put(profile::handle_capture_profile)
                .delete(profile::handle_clear_profile),
        )
        // Roadmap
        .route("/api/v1/roadmap", get(roadmap::handle_get_roadmap))
        .route("/api/v1/roadmap/resolve", post(roadmap::handle_resolve))
        // Catalogue
        .route("/api/v1/opportunities", get(catalog::handle_opportunities))
        .route("/api/v1/opportunities/jobs", get(catalog::handle_jobs))
        .route(
            "/api/v1/opportunities/certifications",
            get(catalog::handle_certifications),
        )
        .route("/api/v1/notifications", get(catalog::handle_notifications))
        .fallback(route_not_found)
        .with_state(state)
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::config::Config;
    use crate::store::MemoryProfileStore;

    fn test_router(strict: bool) -> Router {
        let state = AppState {
            profiles: Arc::new(MemoryProfileStore::new()),
            config: Config {
                strict_profile_capture: strict,
                ..Config::default()
            },
        };
        build_router(state)
    }

    async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health_reports_memory_backend() {
        let router = test_router(true);
        let (status, body) = send(&router, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile_store"], "memory");
    }

    #[tokio::test]
    async fn test_roadmap_without_profile_is_no_profile() {
        let router = test_router(true);
        let uri = format!("/api/v1/roadmap?session_id={}", Uuid::new_v4());
        let (status, body) = send(&router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NO_PROFILE");
    }

    #[tokio::test]
    async fn test_capture_then_display_roadmap() {
        let router = test_router(true);
        let session = Uuid::new_v4();
        let profile_uri = format!("/api/v1/profile?session_id={session}");

        let (status, body) = send(
            &router,
            Method::PUT,
            &profile_uri,
            Some(json!({ "qualification": "Graduate", "interest": "Technology" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["qualification"], "Graduate");

        let uri = format!("/api/v1/roadmap?session_id={session}");
        let (status, body) = send(&router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["interest"], "Technology");
        let steps = body["steps"].as_array().unwrap();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0]["category"], "education");
        assert_eq!(
            steps[0]["title"],
            "Advanced Software Engineering & Data Science"
        );
        assert_eq!(steps[3]["category"], "growth");
        assert_eq!(steps[3]["ordinal"], 4);
    }

    #[tokio::test]
    async fn test_profile_round_trip_and_clear() {
        let router = test_router(true);
        let uri = format!("/api/v1/profile?session_id={}", Uuid::new_v4());

        send(
            &router,
            Method::PUT,
            &uri,
            Some(json!({ "qualification": "Diploma", "interest": "Finance" })),
        )
        .await;
        let (status, body) = send(&router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "qualification": "Diploma", "interest": "Finance" })
        );

        let (status, _) = send(&router, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, body) = send(&router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NO_PROFILE");
    }

    #[tokio::test]
    async fn test_incomplete_form_is_rejected_and_slot_untouched() {
        let router = test_router(true);
        let session = Uuid::new_v4();
        let uri = format!("/api/v1/profile?session_id={session}");

        let (status, body) = send(
            &router,
            Method::PUT,
            &uri,
            Some(json!({ "qualification": "ITI" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, _) = send(&router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_lenient_capture_degrades_at_resolution() {
        let router = test_router(false);
        let session = Uuid::new_v4();
        send(
            &router,
            Method::PUT,
            &format!("/api/v1/profile?session_id={session}"),
            Some(json!({ "qualification": "XYZ", "interest": "Healthcare" })),
        )
        .await;

        let uri = format!("/api/v1/roadmap?session_id={session}");
        let (status, body) = send(&router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["steps"][0]["title"], "Skill Development Course");
        assert_eq!(
            body["steps"][1]["title"],
            "NSQF Level 3-5: Healthcare Services"
        );
    }

    #[tokio::test]
    async fn test_stateless_resolve_accepts_any_strings() {
        let router = test_router(true);
        let (status, body) = send(
            &router,
            Method::POST,
            "/api/v1/roadmap/resolve",
            Some(json!({ "qualification": "PhD", "interest": "Astrology" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let titles: Vec<&str> = body["steps"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["title"].as_str().unwrap())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Skill Development Course",
                "NSQF Certification",
                "Entry Level Positions",
                "Career Advancement Path",
            ]
        );
    }

    #[tokio::test]
    async fn test_catalogue_endpoints() {
        let router = test_router(true);

        let (status, body) = send(&router, Method::GET, "/api/v1/opportunities", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["jobs"].as_array().unwrap().len(), 6);
        assert_eq!(body["certifications"].as_array().unwrap().len(), 6);

        let (_, jobs) = send(&router, Method::GET, "/api/v1/opportunities/jobs", None).await;
        assert_eq!(jobs[0]["sector"], "mnc");
        assert_eq!(jobs[0]["deadline"], "2024-09-30");

        let (_, certs) = send(
            &router,
            Method::GET,
            "/api/v1/opportunities/certifications",
            None,
        )
        .await;
        assert_eq!(certs[1]["fee_label"], "₹3,500");

        let (_, feed) = send(&router, Method::GET, "/api/v1/notifications", None).await;
        assert_eq!(feed["count"], 5);
        assert_eq!(feed["notifications"][0]["kind"], "job");
    }

    async fn assert_envelope(
        router: &Router,
        request: Request<Body>,
        expected_status: StatusCode,
        expected_code: &str,
    ) -> String {
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), expected_status);
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(
            content_type.starts_with("application/json"),
            "content-type was {content_type:?}"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], expected_code);
        body["error"]["message"].as_str().unwrap().to_string()
    }

    fn json_request(method: Method, uri: &str, raw_body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(raw_body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_bad_session_query_uses_error_envelope() {
        let router = test_router(true);

        let missing = Request::builder()
            .uri("/api/v1/roadmap")
            .body(Body::empty())
            .unwrap();
        let message =
            assert_envelope(&router, missing, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
        assert!(message.contains("session_id"), "message was {message}");

        let malformed = Request::builder()
            .uri("/api/v1/profile?session_id=not-a-uuid")
            .body(Body::empty())
            .unwrap();
        assert_envelope(&router, malformed, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
    }

    #[tokio::test]
    async fn test_bad_json_bodies_use_error_envelope() {
        let router = test_router(true);
        let profile_uri = format!("/api/v1/profile?session_id={}", Uuid::new_v4());

        let syntax = json_request(Method::PUT, &profile_uri, "{not json");
        assert_envelope(&router, syntax, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;

        let missing_field = json_request(
            Method::POST,
            "/api/v1/roadmap/resolve",
            r#"{"qualification":"Graduate"}"#,
        );
        let message = assert_envelope(
            &router,
            missing_field,
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
        )
        .await;
        assert!(message.contains("interest"), "message was {message}");

        let null_field = json_request(
            Method::POST,
            "/api/v1/roadmap/resolve",
            r#"{"qualification":null,"interest":"Finance"}"#,
        );
        assert_envelope(&router, null_field, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
    }

    #[tokio::test]
    async fn test_unknown_route_uses_error_envelope() {
        let router = test_router(true);
        let request = Request::builder()
            .uri("/api/v1/nope")
            .body(Body::empty())
            .unwrap();
        let message =
            assert_envelope(&router, request, StatusCode::NOT_FOUND, "NOT_FOUND").await;
        assert!(message.contains("/api/v1/nope"));
    }

    #[tokio::test]
    async fn test_profile_options() {
        let router = test_router(true);
        let (status, body) = send(&router, Method::GET, "/api/v1/profile/options", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["qualifications"][0]["value"], "10th");
        assert_eq!(body["qualifications"][0]["label"], "10th Grade");
        assert_eq!(body["interests"][4]["value"], "Hospitality");
    }
}
