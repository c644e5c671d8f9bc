use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn it_should_return_ok_for_health_check() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    response.assert_status(StatusCode::OK);

    // Health endpoint returns plain text
    let body = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn it_should_report_not_ready_without_a_database() {
    let app = TestApp::new();

    let response = app.get("/health/ready").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.str_field("status"), Some("not_ready"));
    assert_eq!(response.str_field("database"), Some("disconnected"));
}

#[tokio::test]
async fn it_should_include_request_id_in_responses() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    response.assert_header_exists("x-request-id");
}

#[tokio::test]
async fn it_should_propagate_a_client_supplied_request_id() {
    let app = TestApp::new();

    let response = app
        .get_with_header("/health", "x-request-id", "client-trace-7")
        .await;

    assert_eq!(
        response.headers.get("x-request-id").map(String::as_str),
        Some("client-trace-7")
    );
}

#[tokio::test]
async fn it_should_generate_a_request_id_when_client_sends_an_empty_one() {
    let app = TestApp::new();

    let response = app.get_with_header("/health", "x-request-id", "").await;

    let id = response.headers.get("x-request-id").expect("x-request-id");
    assert!(!id.is_empty());
}
