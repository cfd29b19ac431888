//! Contract Test: POST /activities/:activity_name/unregister

use crate::support::{build_app, participants, post, unregister_uri};
use axum::http::StatusCode;

/// 正常系: 登録解除
#[tokio::test]
async fn test_unregister_existing_participant_success() {
    let app = build_app();

    let (status, body) = post(&app, &unregister_uri("Soccer Team", "liam@mergington.edu")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "liam@mergington.edu unregistered from Soccer Team"
    );
}

/// 正常系: 解除が一覧に反映される
#[tokio::test]
async fn test_unregister_removes_participant_from_list() {
    let app = build_app();

    post(&app, &unregister_uri("Swimming Club", "noah@mergington.edu")).await;

    let swimming = participants(&app, "Swimming Club").await;
    assert_eq!(swimming, vec!["mia@mergington.edu"]);
}

/// 異常系: 未登録の参加者は400
#[tokio::test]
async fn test_unregister_nonexistent_participant_fails() {
    let app = build_app();

    let (status, body) = post(
        &app,
        &unregister_uri("Soccer Team", "notasignedupstudent@mergington.edu"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        "notasignedupstudent@mergington.edu is not signed up"
    );
    assert_eq!(participants(&app, "Soccer Team").await.len(), 2);
}

/// 異常系: 存在しないアクティビティは404
#[tokio::test]
async fn test_unregister_nonexistent_activity_fails() {
    let app = build_app();

    let (status, body) = post(
        &app,
        &unregister_uri("Nonexistent Activity", "x@mergington.edu"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().unwrap().contains("not found"));
}

/// 異常系: 二回目の解除は400
#[tokio::test]
async fn test_unregister_twice_conflicts() {
    let app = build_app();
    let uri = unregister_uri("Chess Club", "michael@mergington.edu");

    let (first, _) = post(&app, &uri).await;
    let (second, body) = post(&app, &uri).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("not signed up"));
}

/// GETは許可されない
#[tokio::test]
async fn test_unregister_requires_post() {
    let app = build_app();

    let (status, _) = crate::support::send(
        &app,
        axum::http::Method::GET,
        &unregister_uri("Chess Club", "michael@mergington.edu"),
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

/// 異常系: 不正なUTF-8のパスセグメントはJSONの422
#[tokio::test]
async fn test_unregister_invalid_utf8_activity_name_is_json_error() {
    let app = build_app();

    let (status, body) = post(&app, "/activities/%FF/unregister?email=a@mergington.edu").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}
