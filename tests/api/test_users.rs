use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use serial_test::serial;
use uuid::Uuid;

use crate::helpers::fixtures::{register_user, TEST_PASSWORD};
use crate::helpers::TestApp;

#[tokio::test]
#[serial]
async fn it_should_register_a_user() {
    let app = TestApp::with_database().await;

    let response = app
        .post_json(
            "/user/register",
            &json!({
                "username": "registration_happy",
                "email": "registration_happy@example.com",
                "password": TEST_PASSWORD,
                "role": "ADMIN"
            }),
        )
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.str_field("username"), Some("registration_happy"));
    assert_eq!(
        response.str_field("email"),
        Some("registration_happy@example.com")
    );
    assert_eq!(response.str_field("role"), Some("ADMIN"));
    assert_eq!(
        response.str_field("message"),
        Some("User registration_happy successfully created.")
    );
    // user_id is a real UUID, no password material in the payload
    assert!(Uuid::parse_str(response.str_field("user_id").unwrap()).is_ok());
    assert!(response.json().get("password").is_none());
    assert!(response.json().get("hashed_password").is_none());
}

#[tokio::test]
#[serial]
async fn it_should_reject_duplicate_email_with_conflict() {
    let app = TestApp::with_database().await;
    let user = register_user(&app, "dup_email").await;

    let response = app
        .post_json(
            "/user/register",
            &json!({
                "username": format!("{}_other", user.username),
                "email": user.email,
                "password": TEST_PASSWORD,
                "role": "CONTENTCREATOR"
            }),
        )
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert!(response
        .str_field("message")
        .unwrap()
        .contains("Username or email already in use."));
}

#[tokio::test]
#[serial]
async fn it_should_login_with_valid_credentials() {
    let app = TestApp::with_database().await;
    let user = register_user(&app, "login_ok").await;

    let response = app
        .post_json(
            "/user/login",
            &json!({
                "email": user.email,
                "password": TEST_PASSWORD
            }),
        )
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.bool_field("success"), Some(true));
    assert_eq!(response.str_field("message"), Some("Login successful."));
    assert_eq!(
        response.str_field("session_token"),
        Some(format!("dummy_session_token_for_user_{}", user.user_id).as_str())
    );
}

#[tokio::test]
#[serial]
async fn it_should_return_404_for_unknown_email() {
    let app = TestApp::with_database().await;

    let response = app
        .post_json(
            "/user/login",
            &json!({
                "email": "nobody-here@example.com",
                "password": TEST_PASSWORD
            }),
        )
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response
        .str_field("message")
        .unwrap()
        .contains("User with this email does not exist."));
}

#[tokio::test]
#[serial]
async fn it_should_return_success_false_for_wrong_password() {
    let app = TestApp::with_database().await;
    let user = register_user(&app, "login_wrong_pw").await;

    let response = app
        .post_json(
            "/user/login",
            &json!({
                "email": user.email,
                "password": "not-the-password"
            }),
        )
        .await;

    // Wrong password is an ordinary response, not an HTTP error
    response.assert_status(StatusCode::OK);
    assert_eq!(response.bool_field("success"), Some(false));
    assert_eq!(response.str_field("message"), Some("Incorrect password."));
    assert!(response.str_field("session_token").is_none());
}

#[tokio::test]
#[serial]
async fn it_should_update_only_provided_fields() {
    let app = TestApp::with_database().await;
    let user = register_user(&app, "patch_partial").await;
    let new_username = format!("{}_renamed", user.username);

    let response = app
        .patch_json(
            &format!("/user/{}", user.user_id),
            &json!({
                "username": new_username
            }),
        )
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.bool_field("success"), Some(true));

    let updated = response.json().get("updated_user").expect("updated_user");
    assert_eq!(
        updated.get("username").and_then(|v| v.as_str()),
        Some(new_username.as_str())
    );
    // Untouched fields keep their values
    assert_eq!(
        updated.get("email").and_then(|v| v.as_str()),
        Some(user.email.as_str())
    );
    assert_eq!(
        updated.get("role").and_then(|v| v.as_str()),
        Some("CONTENTCREATOR")
    );
    assert!(updated.get("hashed_password").is_none());
}

#[tokio::test]
#[serial]
async fn it_should_return_404_updating_unknown_user() {
    let app = TestApp::with_database().await;

    let response = app
        .patch_json(
            &format!("/user/{}", Uuid::new_v4()),
            &json!({
                "username": "ghost"
            }),
        )
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn it_should_reject_registration_with_unknown_role() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/user/register",
            &json!({
                "username": "alice",
                "email": "alice@example.com",
                "password": "s3cret",
                "role": "SUPERUSER"
            }),
        )
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn it_should_reject_registration_with_missing_fields() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/user/register",
            &json!({
                "username": "alice"
            }),
        )
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn it_should_reject_login_without_json_content_type() {
    let app = TestApp::new();

    let response = app
        .post_raw("/user/login", None, "email=a@b.com&password=x")
        .await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn it_should_reject_login_with_malformed_json() {
    let app = TestApp::new();

    let response = app
        .post_raw("/user/login", Some("application/json"), "{not json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn it_should_reject_profile_update_with_invalid_user_id() {
    let app = TestApp::new();

    let response = app
        .patch_json(
            "/user/not-a-uuid",
            &json!({
                "username": "bob"
            }),
        )
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
