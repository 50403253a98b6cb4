//! REST client against the mock Text-to-Speech API.

use crate::integration::mock_server::{voices_body, MockServerFixture, TEST_TOKEN};
use gcloud_tts_provider::client::{
    AudioConfig, SpeechApi, SynthesisInput, SynthesizeSpeechRequest, VoiceSelectionParams,
};
use gcloud_tts_provider::options::{AudioEncoding, SsmlVoiceGender};
use gcloud_tts_provider::Error;
use serde_json::json;
use std::time::Duration;

fn hello_request() -> SynthesizeSpeechRequest {
    SynthesizeSpeechRequest {
        input: SynthesisInput::Text("hello".into()),
        voice: VoiceSelectionParams {
            language_code: "en-US".into(),
            name: None,
            ssml_gender: Some(SsmlVoiceGender::Neutral),
        },
        audio_config: AudioConfig {
            audio_encoding: AudioEncoding::Mp3,
            speaking_rate: 1.0,
            pitch: 0.0,
            volume_gain_db: 0.0,
            effects_profile_id: Vec::new(),
        },
    }
}

#[tokio::test]
async fn list_voices_sends_bearer_token() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_voices(TEST_TOKEN, voices_body(), 1).await;

    let voices = fixture.static_token_client().list_voices().await.unwrap();
    assert_eq!(voices.len(), 3);
    assert_eq!(voices[1].name, "en-GB-Standard-A");
    assert_eq!(voices[1].language_codes, vec!["en-GB"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn synthesize_posts_rest_body_and_decodes_audio() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_synthesize(
            json!({
                "input": {"text": "hello"},
                "voice": {"languageCode": "en-US", "ssmlGender": "NEUTRAL"},
                "audioConfig": {"audioEncoding": "MP3", "speakingRate": 1.0}
            }),
            b"ID3\x04fake-mp3",
        )
        .await;

    let response = fixture
        .static_token_client()
        .synthesize_speech(&hello_request(), Duration::from_secs(10))
        .await
        .unwrap();
    assert_eq!(response.audio_content, b"ID3\x04fake-mp3");
    mock.assert_async().await;
}

#[tokio::test]
async fn vendor_error_envelope_becomes_remote_error() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_synthesize_error(
            400,
            r#"{"error":{"code":400,"message":"Voice 'xx' does not exist.","status":"INVALID_ARGUMENT"}}"#,
        )
        .await;

    let err = fixture
        .static_token_client()
        .synthesize_speech(&hello_request(), Duration::from_secs(10))
        .await
        .unwrap_err();
    match err {
        Error::Remote { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Voice 'xx' does not exist. (INVALID_ARGUMENT)");
        }
        other => panic!("unexpected error: {}", other),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn malformed_audio_payload_is_a_decode_error() {
    let fixture = MockServerFixture::new().await;
    let _mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", "/v1/text:synthesize")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"audioContent":"%%% not base64 %%%"}"#)
            .create_async()
            .await
    };

    let err = fixture
        .static_token_client()
        .synthesize_speech(&hello_request(), Duration::from_secs(10))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)), "unexpected error: {}", err);
}
