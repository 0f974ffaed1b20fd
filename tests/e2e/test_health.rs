use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    // Health endpoint returns plain text
    let body = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert_eq!(body, "OK");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_storage_and_generator_when_ready(ctx: &TestContext) {
    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["storage"], "available");
    assert_eq!(body["generator"], "configured");
}

#[tokio::test]
async fn it_should_report_disabled_generator_without_api_key() {
    let ctx = TestContext::start(false).await;

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body()["generator"], "disabled");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_be_unavailable_when_data_dir_disappears(ctx: &TestContext) {
    std::fs::remove_dir_all(&ctx.config.data_dir).unwrap();

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body()["status"], "not_ready");
    assert_eq!(response.body()["storage"], "unavailable");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_responses(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();
    response.assert_header_exists("x-request-id");

    let response = ctx.client.get("/api/admin/feeds").await.unwrap();
    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_header_exists("x-request-id");
}
