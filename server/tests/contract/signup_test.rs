//! Contract Test: POST /activities/:activity_name/signup

use crate::support::{build_app, participants, post, signup_uri};
use axum::http::StatusCode;

/// 正常系: 新規参加者の登録
#[tokio::test]
async fn test_signup_new_participant_success() {
    let app = build_app();

    let (status, body) = post(&app, &signup_uri("Soccer Team", "newstudent@mergington.edu")).await;

    assert_eq!(status, StatusCode::OK);
    let message = body["message"].as_str().unwrap();
    assert_eq!(message, "newstudent@mergington.edu signed up for Soccer Team");

    let soccer = participants(&app, "Soccer Team").await;
    assert_eq!(soccer.len(), 3);
    assert!(soccer.contains(&"newstudent@mergington.edu".to_string()));
}

/// 正常系: 登録が一覧に反映される
#[tokio::test]
async fn test_signup_adds_participant_to_list() {
    let app = build_app();

    post(&app, &signup_uri("Swimming Club", "newstudent@mergington.edu")).await;

    let swimming = participants(&app, "Swimming Club").await;
    assert!(swimming.contains(&"newstudent@mergington.edu".to_string()));
}

/// 異常系: 二重登録は400
#[tokio::test]
async fn test_signup_duplicate_fails() {
    let app = build_app();

    let (status, body) = post(&app, &signup_uri("Soccer Team", "liam@mergington.edu")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "liam@mergington.edu is already signed up");
    assert_eq!(participants(&app, "Soccer Team").await.len(), 2);
}

/// 異常系: 存在しないアクティビティは404
#[tokio::test]
async fn test_signup_nonexistent_activity_fails() {
    let app = build_app();

    let (status, body) = post(
        &app,
        &signup_uri("Nonexistent Activity", "student@mergington.edu"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");
}

/// 異常系: アクティビティ名は大文字小文字を区別する
#[tokio::test]
async fn test_signup_activity_name_is_case_sensitive() {
    let app = build_app();

    let (status, _) = post(&app, &signup_uri("soccer team", "student@mergington.edu")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// 正常系: 複数の参加者
#[tokio::test]
async fn test_signup_multiple_participants() {
    let app = build_app();

    post(&app, &signup_uri("Art Studio", "student1@mergington.edu")).await;
    post(&app, &signup_uri("Art Studio", "student2@mergington.edu")).await;

    let art = participants(&app, "Art Studio").await;
    assert!(art.contains(&"student1@mergington.edu".to_string()));
    assert!(art.contains(&"student2@mergington.edu".to_string()));
    assert_eq!(art.len(), 4);
}

/// 異常系: emailが無い場合は422
#[tokio::test]
async fn test_signup_missing_email_is_rejected() {
    let app = build_app();

    let (status, body) = post(&app, "/activities/Soccer%20Team/signup").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "email query parameter is required");

    let (status, _) = post(&app, "/activities/Soccer%20Team/signup?email=").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(participants(&app, "Soccer Team").await.len(), 2);
}

/// 正常系: メールアドレスの形式は検査しない
#[tokio::test]
async fn test_signup_accepts_unformatted_email() {
    let app = build_app();

    let (status, body) = post(&app, &signup_uri("Chess Club", "not-an-email")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "not-an-email signed up for Chess Club");
}

/// 正常系: 定員を超えても登録できる
#[tokio::test]
async fn test_signup_beyond_capacity_is_accepted() {
    let app = build_app();

    for i in 0..12 {
        let (status, _) = post(
            &app,
            &signup_uri("Chess Club", &format!("extra{i}@mergington.edu")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    assert_eq!(participants(&app, "Chess Club").await.len(), 14);
}

/// 正常系: emailが複数回指定された場合は最後の値を使う
#[tokio::test]
async fn test_signup_repeated_email_uses_last_value() {
    let app = build_app();

    let (status, body) = post(
        &app,
        "/activities/Soccer%20Team/signup?email=first@mergington.edu&email=last@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "last@mergington.edu signed up for Soccer Team");

    let soccer = participants(&app, "Soccer Team").await;
    assert!(soccer.contains(&"last@mergington.edu".to_string()));
    assert!(!soccer.contains(&"first@mergington.edu".to_string()));
}

/// 異常系: 不正なUTF-8のパスセグメントはJSONの422
#[tokio::test]
async fn test_signup_invalid_utf8_activity_name_is_json_error() {
    let app = build_app();

    let (status, body) = post(&app, "/activities/%FF/signup?email=a@mergington.edu").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("activity_name"));
}
