mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{build_app, MockStore};
use tower::ServiceExt;

const EXTENSION_ORIGIN: &str = "https://psu.instructure.com";

#[tokio::test]
async fn preflight_allows_any_origin() {
    let app = build_app(MockStore::new(), None);

    let req = Request::builder()
        .method("OPTIONS")
        .uri("/api/quiz-logs")
        .header(header::ORIGIN, EXTENSION_ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    assert!(methods.contains("POST"));
    assert!(methods.contains("GET"));
}

#[tokio::test]
async fn simple_request_gets_wildcard_origin() {
    let app = build_app(MockStore::new(), None);

    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .header(header::ORIGIN, "chrome-extension://abcdefghijklmnop")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
