use crate::e2e::helpers;

use chrono::{TimeZone, Utc};
use helpers::fixtures::{news_item, REPORT_WITH_CHART};
use helpers::TestContext;
use hyper::StatusCode;
use market_briefing::infrastructure::storage::STATS_FILE;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_count_a_first_visit_and_set_cookie(ctx: &TestContext) {
    let response = ctx.client.get("/api/dashboard").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body()["visitors"], 1);
    assert_eq!(
        response.header("set-cookie").map(String::as_str),
        Some("visited=1; Path=/; HttpOnly")
    );
    assert_eq!(response.body()["report"], json!(null));
    assert_eq!(response.body()["news"], json!([]));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_count_returning_visitors(ctx: &TestContext) {
    ctx.client.get("/api/dashboard").await.unwrap();

    let response = ctx
        .client
        .get_with_cookie("/api/dashboard", "visited=1")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body()["visitors"], 1);
    assert!(response.header("set-cookie").is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_add_one_per_new_session(ctx: &TestContext) {
    for _ in 0..5 {
        ctx.client
            .get("/api/dashboard")
            .await
            .unwrap()
            .assert_status(StatusCode::OK);
    }

    let stats = ctx.client.get("/api/stats").await.unwrap();
    stats.assert_status(StatusCode::OK);
    assert_eq!(stats.body()["visitors"], 5);
    assert_eq!(ctx.fixtures.read_json(STATS_FILE).unwrap()["visitors"], 5);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_show_latest_report_and_filtered_news(ctx: &TestContext) {
    let published = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    ctx.fixtures
        .seed_news(&[
            news_item("Battery makers slide", published),
            news_item("Won weakens", published),
        ])
        .await;
    ctx.mount_model_reply(REPORT_WITH_CHART).await;
    ctx.client
        .post_admin("/api/admin/reports", &json!({}))
        .await
        .unwrap()
        .assert_status(StatusCode::CREATED);

    let response = ctx
        .client
        .get_with_cookie("/api/dashboard?q=battery", "visited=1")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body["report"]["content"], REPORT_WITH_CHART);
    assert_eq!(body["report"]["chart"].as_array().unwrap().len(), 2);

    let news = body["news"].as_array().unwrap();
    assert_eq!(news.len(), 1);
    assert_eq!(news[0]["title"], "Battery makers slide");
}
