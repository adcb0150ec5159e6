use axum::http::StatusCode;
use serde_json::json;

mod helpers;

#[tokio::test]
async fn test_prayer_request_forwarded() -> anyhow::Result<()> {
    let state = helpers::setup_test_state().await?;

    let (status, body) = state
        .post_json(
            "/api/prayer",
            json!({"name": "Joe Smith", "message": "Safe travels for my family"}),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let prayers = state.mailer.prayers();
    assert_eq!(prayers.len(), 1);
    assert_eq!(prayers[0].sender(), "Joe Smith");

    Ok(())
}

#[tokio::test]
async fn test_prayer_request_needs_message() -> anyhow::Result<()> {
    let state = helpers::setup_test_state().await?;

    let (status, body) = state
        .post_json("/api/prayer", json!({"name": "Joe", "message": "  "}))
        .await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["fields"]["message"][0], "Please enter a prayer request.");
    assert!(state.mailer.prayers().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_prayer_request_send_failure() -> anyhow::Result<()> {
    let state = helpers::setup_test_state().await?;
    state.mailer.fail();

    let (status, body) = state
        .post_json(
            "/api/prayer",
            json!({"message": "Healing for my mom", "anonymous": true}),
        )
        .await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "prayer_not_sent");

    Ok(())
}

#[tokio::test]
async fn test_prayer_request_loose_anonymous_flag() -> anyhow::Result<()> {
    let state = helpers::setup_test_state().await?;

    let (status, _) = state
        .post_json(
            "/api/prayer",
            json!({"name": "Joe", "message": "Peace for my family", "anonymous": "on"}),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(state.mailer.prayers()[0].sender(), "Joe");

    Ok(())
}
