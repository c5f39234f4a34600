mod common;

use axum::http::StatusCode;
use common::{build_app, get, json_body, MockStore};
use serde_json::json;
use tower::ServiceExt;
use wiremock::{
    matchers::{any, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

const ROUTES: [&str; 3] = ["assignments", "quizzes", "grades"];

#[tokio::test]
async fn missing_params_are_400_without_upstream_call() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let app = build_app(MockStore::new(), Some(&server.uri()));

    for route in ROUTES {
        for query in ["?courseId=10", "?accessToken=tok", "", "?courseId=&accessToken=tok"] {
            let resp = app
                .clone()
                .oneshot(get(&format!("/api/canvas/{}{}", route, query)))
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{route}{query}");
            assert_eq!(
                json_body(resp).await,
                json!({ "error": "Missing courseId or accessToken" })
            );
        }
    }
}

#[tokio::test]
async fn assignments_pass_through_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/courses/10/assignments"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1 }])))
        .expect(1)
        .mount(&server)
        .await;
    let app = build_app(MockStore::new(), Some(&server.uri()));

    let resp = app
        .oneshot(get("/api/canvas/assignments?courseId=10&accessToken=tok"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, json!([{ "id": 1 }]));
}

#[tokio::test]
async fn grades_come_from_student_submissions() {
    let server = MockServer::start().await;
    let submissions = json!([{ "assignment_id": 7, "score": 9.5, "grade": "A" }]);
    Mock::given(method("GET"))
        .and(path("/api/v1/courses/55/students/submissions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(submissions.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/courses/55/quizzes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let app = build_app(MockStore::new(), Some(&server.uri()));

    let resp = app
        .clone()
        .oneshot(get("/api/canvas/grades?courseId=55&accessToken=tok"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, submissions);

    let resp = app
        .oneshot(get("/api/canvas/quizzes?courseId=55&accessToken=tok"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, json!([]));
}

#[tokio::test]
async fn upstream_status_is_relayed_with_generic_message() {
    let server = MockServer::start().await;
    Mock::given(path("/api/v1/courses/10/assignments"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "errors": [{ "message": "secret detail" }] })),
        )
        .mount(&server)
        .await;
    Mock::given(path("/api/v1/courses/10/quizzes"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let app = build_app(MockStore::new(), Some(&server.uri()));

    let resp = app
        .clone()
        .oneshot(get("/api/canvas/assignments?courseId=10&accessToken=tok"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(resp).await,
        json!({ "error": "Error fetching assignments from Canvas" })
    );

    let resp = app
        .oneshot(get("/api/canvas/quizzes?courseId=10&accessToken=bad"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        json_body(resp).await,
        json!({ "error": "Error fetching quizzes from Canvas" })
    );
}

#[tokio::test]
async fn network_failure_is_500_with_message() {
    let unused = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = unused.local_addr().unwrap().port();
    drop(unused);
    let app = build_app(MockStore::new(), Some(&format!("http://127.0.0.1:{}", port)));

    let resp = app
        .oneshot(get("/api/canvas/grades?courseId=10&accessToken=tok"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(resp).await;
    let message = body["error"].as_str().unwrap();
    assert!(!message.is_empty());
    assert!(!message.contains("tok"));
}

#[tokio::test]
async fn unparseable_upstream_body_is_500() {
    let server = MockServer::start().await;
    Mock::given(path("/api/v1/courses/10/assignments"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;
    let app = build_app(MockStore::new(), Some(&server.uri()));

    let resp = app
        .oneshot(get("/api/canvas/assignments?courseId=10&accessToken=tok"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json_body(resp).await["error"].is_string());
}
