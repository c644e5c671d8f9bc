use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use serial_test::serial;
use uuid::Uuid;

use crate::helpers::fixtures::register_user;
use crate::helpers::TestApp;

#[tokio::test]
#[serial]
async fn it_should_record_a_synthesis_request() {
    let app = TestApp::with_database().await;
    let user = register_user(&app, "synth_ok").await;

    let response = app
        .post_json(
            "/speech/synthesize",
            &json!({
                "user_id": user.user_id,
                "input_text": "Hello, this is a synthesis request.",
                "input_format": "PLAIN_TEXT",
                "language": "EN_US",
                "voice": "FEMALE_EN_US",
                "speech_speed": 1.0,
                "pitch": 1.0,
                "volume": 1.0
            }),
        )
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.str_field("status"), Some("SUCCESS"));
    assert_eq!(response.str_field("error_message"), Some(""));
    assert_eq!(
        response.str_field("file_path"),
        Some(format!("/var/www/speech_outputs/{}.mp3", user.user_id).as_str())
    );
    assert_eq!(
        response.str_field("playback_url"),
        Some(format!("https://speech.example.com/play/{}.mp3", user.user_id).as_str())
    );
    // The recorded request gets its own id, distinct from the user id
    let request_id = response.str_field("speech_request_id").unwrap();
    assert!(Uuid::parse_str(request_id).is_ok());
    assert_ne!(request_id, user.user_id);
}

#[tokio::test]
#[serial]
async fn it_should_record_ssml_requests_too() {
    let app = TestApp::with_database().await;
    let user = register_user(&app, "synth_ssml").await;

    let response = app
        .post_json(
            "/speech/synthesize",
            &json!({
                "user_id": user.user_id,
                "input_text": "<speak>Hello</speak>",
                "input_format": "SSML",
                "language": "EN_US",
                "voice": "FEMALE_EN_US",
                "speech_speed": 1.2,
                "pitch": 0.9,
                "volume": 1.0
            }),
        )
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.str_field("status"), Some("SUCCESS"));
}

#[tokio::test]
#[serial]
async fn it_should_return_404_for_unknown_user() {
    let app = TestApp::with_database().await;

    let response = app
        .post_json(
            "/speech/synthesize",
            &json!({
                "user_id": Uuid::new_v4(),
                "input_text": "Hello",
                "input_format": "PLAIN_TEXT",
                "language": "EN_US",
                "voice": "FEMALE_EN_US",
                "speech_speed": 1.0,
                "pitch": 1.0,
                "volume": 1.0
            }),
        )
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn it_should_reject_unknown_input_format() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/speech/synthesize",
            &json!({
                "user_id": Uuid::new_v4(),
                "input_text": "Hello",
                "input_format": "WAV",
                "language": "EN_US",
                "voice": "FEMALE_EN_US",
                "speech_speed": 1.0,
                "pitch": 1.0,
                "volume": 1.0
            }),
        )
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn it_should_reject_empty_input_text() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/speech/synthesize",
            &json!({
                "user_id": Uuid::new_v4(),
                "input_text": "",
                "input_format": "PLAIN_TEXT",
                "language": "EN_US",
                "voice": "FEMALE_EN_US",
                "speech_speed": 1.0,
                "pitch": 1.0,
                "volume": 1.0
            }),
        )
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response
        .str_field("message")
        .unwrap()
        .contains("Input text cannot be empty"));
}

#[tokio::test]
async fn it_should_reject_non_uuid_user_id() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/speech/synthesize",
            &json!({
                "user_id": "user-123",
                "input_text": "Hello",
                "input_format": "PLAIN_TEXT",
                "language": "EN_US",
                "voice": "FEMALE_EN_US",
                "speech_speed": 1.0,
                "pitch": 1.0,
                "volume": 1.0
            }),
        )
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}
