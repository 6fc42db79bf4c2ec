mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn create_and_fetch_lists() -> Result<()> {
    let app = common::app();
    let token = common::register_user(&app, "Ada", "ada@example.com", "difference").await?;

    let (status, body) = common::request(
        &app,
        Method::POST,
        "/api/lists",
        Some(&token),
        Some(json!({
            "title": "groceries",
            "description": "weekly run",
            "completion_date": "2026-09-01"
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let list_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = common::request(&app, Method::GET, "/api/lists", Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    let lists = body["data"]["lists"].as_array().unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0]["title"], "groceries");
    assert_eq!(lists[0]["completion_date"], "2026-09-01");

    let (status, body) = common::request(
        &app,
        Method::GET,
        &format!("/api/lists/{}", list_id),
        Some(&token),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["list"]["id"], list_id);
    assert_eq!(body["data"]["list"]["description"], "weekly run");

    Ok(())
}

#[tokio::test]
async fn create_list_validates_title() -> Result<()> {
    let app = common::app();
    let token = common::register_user(&app, "Ada", "ada@example.com", "difference").await?;

    let (status, body) = common::request(
        &app,
        Method::POST,
        "/api/lists",
        Some(&token),
        Some(json!({ "title": "ab" })),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["field_errors"]["title"].is_string());

    Ok(())
}

#[tokio::test]
async fn missing_title_returns_validation_envelope() -> Result<()> {
    let app = common::app();
    let token = common::register_user(&app, "Ada", "ada@example.com", "difference").await?;

    let (status, body) = common::request(
        &app,
        Method::POST,
        "/api/lists",
        Some(&token),
        Some(json!({ "description": "body without a title" })),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["field_errors"]["title"].is_string());

    Ok(())
}

#[tokio::test]
async fn partial_update_changes_only_supplied_fields() -> Result<()> {
    let app = common::app();
    let token = common::register_user(&app, "Ada", "ada@example.com", "difference").await?;
    let list_id = common::create_list(&app, &token, "groceries").await?;

    let (status, _) = common::request(
        &app,
        Method::PUT,
        &format!("/api/lists/{}", list_id),
        Some(&token),
        Some(json!({ "description": "moved to saturday" })),
    )
    .await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = common::request(
        &app,
        Method::GET,
        &format!("/api/lists/{}", list_id),
        Some(&token),
        None,
    )
    .await?;
    assert_eq!(body["data"]["list"]["title"], "groceries");
    assert_eq!(body["data"]["list"]["description"], "moved to saturday");

    Ok(())
}

#[tokio::test]
async fn update_without_values_is_rejected() -> Result<()> {
    let app = common::app();
    let token = common::register_user(&app, "Ada", "ada@example.com", "difference").await?;
    let list_id = common::create_list(&app, &token, "groceries").await?;

    let (status, body) = common::request(
        &app,
        Method::PUT,
        &format!("/api/lists/{}", list_id),
        Some(&token),
        Some(json!({})),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "update request has no values");

    Ok(())
}

#[tokio::test]
async fn other_users_lists_are_invisible() -> Result<()> {
    let app = common::app();
    let owner = common::register_user(&app, "Ada", "ada@example.com", "difference").await?;
    let intruder = common::register_user(&app, "Eve", "eve@example.com", "eavesdrop").await?;
    let list_id = common::create_list(&app, &owner, "groceries").await?;

    // Read, update and delete all report not-found for the non-owner
    let uri = format!("/api/lists/{}", list_id);

    let (status, body) = common::request(&app, Method::GET, &uri, Some(&intruder), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "list not found");

    let (status, _) = common::request(
        &app,
        Method::PUT,
        &uri,
        Some(&intruder),
        Some(json!({ "title": "hijacked" })),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = common::request(&app, Method::DELETE, &uri, Some(&intruder), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The owner still sees the list untouched
    let (status, body) = common::request(&app, Method::GET, &uri, Some(&owner), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["list"]["title"], "groceries");

    Ok(())
}

#[tokio::test]
async fn a_user_can_touch_any_of_their_own_lists() -> Result<()> {
    // Older entities must stay reachable after newer ones are created.
    let app = common::app();
    let token = common::register_user(&app, "Ada", "ada@example.com", "difference").await?;

    let first = common::create_list(&app, &token, "first list").await?;
    let second = common::create_list(&app, &token, "second list").await?;

    let (status, _) = common::request(
        &app,
        Method::PUT,
        &format!("/api/lists/{}", first),
        Some(&token),
        Some(json!({ "title": "renamed first" })),
    )
    .await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = common::request(
        &app,
        Method::GET,
        &format!("/api/lists/{}", first),
        Some(&token),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["list"]["title"], "renamed first");

    let (status, _) = common::request(
        &app,
        Method::DELETE,
        &format!("/api/lists/{}", second),
        Some(&token),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    Ok(())
}

#[tokio::test]
async fn deleting_a_list_removes_its_items() -> Result<()> {
    let app = common::app();
    let token = common::register_user(&app, "Ada", "ada@example.com", "difference").await?;
    let list_id = common::create_list(&app, &token, "groceries").await?;

    let (status, body) = common::request(
        &app,
        Method::POST,
        &format!("/api/lists/{}/items", list_id),
        Some(&token),
        Some(json!({ "title": "buy milk" })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let item_id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = common::request(
        &app,
        Method::DELETE,
        &format!("/api/lists/{}", list_id),
        Some(&token),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = common::request(
        &app,
        Method::GET,
        &format!("/api/items/{}", item_id),
        Some(&token),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}
