//! Error response normalization middleware
//!
//! Framework-level rejections (malformed JSON, missing fields, unknown routes,
//! wrong methods) come back as text/plain. This rewrites them into the same
//! JSON envelope that [`crate::error::AppError`] produces and keeps parser
//! positions out of client responses.

use crate::error::{ErrorResponse, VALIDATION_ERROR};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

/// Middleware that normalizes all error responses to consistent JSON format.
pub async fn normalize_error_response(request: Request<Body>, next: Next) -> Response {
    let response = next.run(request).await;
    let status = response.status();

    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("application/json"));

    if is_json {
        // Already shaped by AppError
        return response;
    }

    generic_error_response(status)
}

fn generic_error_response(status: StatusCode) -> Response {
    let (error_type, message) = match status {
        StatusCode::BAD_REQUEST => ("bad_request", "Invalid request body"),
        StatusCode::NOT_FOUND => ("not_found", "Not found"),
        StatusCode::METHOD_NOT_ALLOWED => ("method_not_allowed", "Method not allowed"),
        StatusCode::PAYLOAD_TOO_LARGE => ("payload_too_large", "Request body too large"),
        StatusCode::UNPROCESSABLE_ENTITY => (
            VALIDATION_ERROR,
            "Request body is missing required fields or has invalid values",
        ),
        StatusCode::UNSUPPORTED_MEDIA_TYPE => (
            "unsupported_media_type",
            "Expected request with `Content-Type: application/json`",
        ),
        _ if status.is_client_error() => ("client_error", "Client error"),
        _ => ("internal_error", "An internal error occurred"),
    };

    (status, Json(ErrorResponse::new(error_type, message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::post, Router};
    use rstest::rstest;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    #[allow(dead_code)]
    struct Payload {
        name: String,
    }

    fn app() -> Router {
        Router::new()
            .route("/ok", post(|| async { (StatusCode::OK, "ok") }))
            .route(
                "/text-error",
                post(|| async { (StatusCode::BAD_REQUEST, "Some text error") }),
            )
            .route("/json", post(|Json(_): Json<Payload>| async { "accepted" }))
            .layer(axum::middleware::from_fn(normalize_error_response))
    }

    async fn send(method: &str, uri: &str, body: &'static str) -> Response {
        app()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_success_response_passthrough() {
        let response = send("POST", "/ok", "").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_text_error_converted_to_json() {
        let response = send("POST", "/text-error", "").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let ct = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(ct.to_str().unwrap().contains("application/json"));

        let body = body_json(response).await;
        assert_eq!(body["error"], "bad_request");
        assert_eq!(body["detail"], body["message"]);
    }

    #[rstest]
    #[case("POST", "/json", "{\"name\": ", StatusCode::BAD_REQUEST, "bad_request")]
    #[case("POST", "/json", "{}", StatusCode::UNPROCESSABLE_ENTITY, "validation_error")]
    #[case("POST", "/missing", "{}", StatusCode::NOT_FOUND, "not_found")]
    #[case("GET", "/json", "", StatusCode::METHOD_NOT_ALLOWED, "method_not_allowed")]
    #[tokio::test]
    async fn test_framework_rejections_normalized(
        #[case] method: &str,
        #[case] uri: &str,
        #[case] body: &'static str,
        #[case] status: StatusCode,
        #[case] error_type: &str,
    ) {
        let response = send(method, uri, body).await;
        assert_eq!(response.status(), status);

        let body = body_json(response).await;
        assert_eq!(body["error"], error_type);
        assert!(body["detail"].is_string());
    }
}
