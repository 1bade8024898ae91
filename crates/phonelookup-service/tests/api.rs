//! In-process HTTP tests for the lookup service router.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;

use phonelookup_lib::PhoneDirectory;
use phonelookup_service::{app, AppState};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/phone_numbers.csv")
}

fn test_server() -> TestServer {
    let state = AppState::load(fixture_path()).expect("load fixture directory");
    TestServer::new(app(state)).expect("start test server")
}

#[tokio::test]
async fn lookup_known_number_returns_200_with_record() {
    let server = test_server();

    let response = server.get("/api/phonenumber/13812345678").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "");
    assert_eq!(body["data"]["segment"], "1381234");
    assert_eq!(body["data"]["province"], "Beijing");
    assert_eq!(body["data"]["serviceProvider"], "China Mobile");
    assert_eq!(body["data"]["areaCode"], "010");
}

#[tokio::test]
async fn lookup_short_number_returns_400_with_length_message() {
    let server = test_server();

    let response = server.get("/api/phonenumber/138123").await;
    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "phone number must be 11 digits");
    assert_eq!(body["data"], Value::Null);
}

#[tokio::test]
async fn lookup_wrong_leading_digit_returns_400() {
    let server = test_server();

    let response = server.get("/api/phonenumber/23812345678").await;
    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["message"], "phone number must start with 1");
}

#[tokio::test]
async fn lookup_non_digit_input_returns_400() {
    let server = test_server();

    let response = server.get("/api/phonenumber/1381234abcd").await;
    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["message"], "phone number must contain only digits");
}

#[tokio::test]
async fn lookup_unknown_segment_returns_400() {
    let server = test_server();

    let response = server.get("/api/phonenumber/19999999999").await;
    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "no carrier information found for this phone number"
    );
}

#[tokio::test]
async fn lookup_is_idempotent() {
    let server = test_server();

    let first: Value = server.get("/api/phonenumber/13812345678").await.json();
    let second: Value = server.get("/api/phonenumber/13812345678").await.json();
    assert_eq!(first, second);
}

#[tokio::test]
async fn health_live_returns_ok() {
    let server = test_server();

    let response = server.get("/health/live").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "phonelookup-service");
}

#[tokio::test]
async fn health_ready_reports_record_count() {
    let server = test_server();

    let response = server.get("/health/ready").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["records_loaded"], 5);
}

#[tokio::test]
async fn health_ready_returns_503_for_empty_directory() {
    let state = AppState::from_directory(PhoneDirectory::default());
    let server = TestServer::new(app(state)).expect("start test server");

    let response = server.get("/health/ready").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = response.json();
    assert!(body["status"].as_str().unwrap().starts_with("not_ready"));
}

#[tokio::test]
async fn panic_is_contained_as_generic_500_envelope() {
    use axum::{routing::get, Router};
    use phonelookup_service::handle_panic;
    use tower_http::catch_panic::CatchPanicLayer;

    // A handler that faults mid-request, behind the same panic handler
    // the service router installs.
    let router: Router = Router::new()
        .route(
            "/boom",
            get(|| async {
                panic!("corrupted state");
                #[allow(unreachable_code)]
                ()
            }),
        )
        .layer(CatchPanicLayer::custom(handle_panic));
    let server = TestServer::new(router).expect("start test server");

    let response = server.get("/boom").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "internal server error");
    assert_eq!(body["data"], Value::Null);
}

#[tokio::test]
async fn metrics_endpoint_responds() {
    let server = test_server();

    let response = server.get("/metrics").await;
    response.assert_status_ok();
}
