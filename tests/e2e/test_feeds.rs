use crate::e2e::helpers;

use helpers::fixtures::rss_feed;
use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_admin_requests_without_password(ctx: &TestContext) {
    let response = ctx.client.get("/api/admin/feeds").await.unwrap();
    response
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error_message("Missing admin password");

    let response = ctx
        .client
        .post_with_password(
            "/api/admin/feeds",
            &json!({ "name": "A", "url": "https://a.example.com/rss", "category": "Economy" }),
            "wrong",
        )
        .await
        .unwrap();
    response
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error_message("Wrong admin password");

    // Nothing was registered
    let feeds = ctx.client.get_admin("/api/admin/feeds").await.unwrap();
    assert_eq!(feeds.body().as_array().unwrap().len(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_create_and_list_a_feed(ctx: &TestContext) {
    let response = ctx
        .client
        .post_admin(
            "/api/admin/feeds",
            &json!({
                "name": "Daily Markets",
                "url": "https://markets.example.com/rss",
                "category": "Global"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.body(),
        &json!({
            "name": "Daily Markets",
            "url": "https://markets.example.com/rss",
            "category": "Global"
        })
    );

    let response = ctx.client.get_admin("/api/admin/feeds").await.unwrap();
    response.assert_status(StatusCode::OK);

    let feeds = response.body().as_array().unwrap();
    let matching = feeds
        .iter()
        .filter(|f| f["url"] == "https://markets.example.com/rss")
        .count();
    assert_eq!(matching, 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_blank_feed_fields(ctx: &TestContext) {
    let response = ctx
        .client
        .post_admin(
            "/api/admin/feeds",
            &json!({ "name": "   ", "url": "https://a.example.com/rss", "category": "Economy" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("required");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_remove_every_feed_sharing_a_url(ctx: &TestContext) {
    ctx.add_feed("First", "https://dup.example.com/rss").await;
    ctx.add_feed("Second", "https://dup.example.com/rss").await;
    ctx.add_feed("Other", "https://other.example.com/rss").await;

    let response = ctx
        .client
        .delete_admin("/api/admin/feeds?url=https%3A%2F%2Fdup.example.com%2Frss")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body()["removed"], 2);

    let feeds = ctx.client.get_admin("/api/admin/feeds").await.unwrap();
    let feeds = feeds.body().as_array().unwrap();
    assert_eq!(feeds.len(), 1);
    assert_eq!(feeds[0]["name"], "Other");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_feed_presets(ctx: &TestContext) {
    let response = ctx.client.get_admin("/api/admin/feed-presets").await.unwrap();

    response.assert_status(StatusCode::OK);
    let presets = response.body().as_array().unwrap();
    assert!(!presets.is_empty());
    for preset in presets {
        assert!(preset["name"].is_string());
        assert!(preset["url"].as_str().unwrap().starts_with("https://"));
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_check_registered_feeds(ctx: &TestContext) {
    ctx.mount_feed(
        "/good.xml",
        rss_feed(&[(
            "Rates hold",
            "https://news.example.com/rates",
            "Mon, 01 Jan 2024 00:00:00 +0000",
        )]),
    )
    .await;
    ctx.add_feed("Good", &ctx.feed_url("/good.xml")).await;
    ctx.add_feed("Missing", &ctx.feed_url("/missing.xml")).await;

    let response = ctx
        .client
        .post_admin("/api/admin/feeds/check", &json!({}))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let checks = response.body().as_array().unwrap();
    assert_eq!(checks.len(), 2);

    assert_eq!(checks[0]["name"], "Good");
    assert_eq!(checks[0]["status"], 200);
    assert_eq!(checks[0]["entries"], 1);
    assert_eq!(checks[0]["first_title"], "Rates hold");

    assert_eq!(checks[1]["name"], "Missing");
    assert_eq!(checks[1]["status"], 404);
    assert_eq!(checks[1]["entries"], 0);
    assert!(checks[1]["error"].is_string());
}
