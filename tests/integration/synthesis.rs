//! End-to-end: key file on disk, setup, voice lookup and synthesis over HTTP.

use crate::integration::mock_server::{voices_body, MockServerFixture};
use gcloud_tts_provider::{
    get_engine_at, get_engine_with_api, GoogleCloudTtsProvider, HostContext, ProviderConfig,
    TtsOptions, TtsProvider,
};
use serde_json::json;
use std::sync::Arc;

/// Only the synthesis call remains after this returns; the token is cached.
async fn setup(fixture: &MockServerFixture, config: &ProviderConfig) -> GoogleCloudTtsProvider {
    let dir = tempfile::tempdir().unwrap();
    let key_file = fixture.write_authorized_user(dir.path());
    let _token = fixture
        .mock_token(
            "refresh_token",
            200,
            json!({"access_token": "user-token", "expires_in": 3600}),
        )
        .await;
    let _voices = fixture.mock_voices("user-token", voices_body(), 1).await;

    let client = fixture.key_file_client(&key_file);
    get_engine_with_api(config, Arc::new(client))
        .await
        .expect("engine")
}

#[tokio::test]
async fn setup_builds_catalog_from_vendor_voices() {
    let fixture = MockServerFixture::new().await;
    let provider = setup(&fixture, &ProviderConfig::default()).await;

    assert_eq!(provider.supported_languages(), vec!["en-GB", "en-US", "nl-NL"]);
    let voices = provider.supported_voices("nl-NL").unwrap();
    assert_eq!(voices[0].voice_id, "nl-NL-Standard-B");
    assert!(provider.supported_voices("ja-JP").is_none());
}

#[tokio::test]
async fn voice_override_reaches_the_wire() {
    let fixture = MockServerFixture::new().await;
    let config = ProviderConfig::from_value(&json!({"encoding": "OGG_OPUS"})).unwrap();
    let provider = setup(&fixture, &config).await;

    let synth = fixture
        .mock_synthesize(
            json!({
                "input": {"text": "The garage door is open"},
                "voice": {"languageCode": "en-GB", "name": "en-GB-Standard-A"},
                "audioConfig": {
                    "audioEncoding": "OGG_OPUS",
                    "speakingRate": 0.25,
                    "effectsProfileId": ["small-bluetooth-speaker-class-device"]
                }
            }),
            b"OggS-fake",
        )
        .await;

    let mut options = TtsOptions::new();
    options.insert("voice".into(), json!("en-GB-Standard-A"));
    options.insert("gender".into(), json!("male"));
    options.insert("speed".into(), json!(0.01));
    options.insert("profiles".into(), json!("small-bluetooth-speaker-class-device"));

    let audio = provider
        .get_tts_audio("The garage door is open", "en-US", &options)
        .await
        .expect("audio");
    assert_eq!(audio.into_parts(), ("ogg", b"OggS-fake".to_vec()));
    synth.assert_async().await;
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let fixture = MockServerFixture::new().await;
    let provider = setup(&fixture, &ProviderConfig::default()).await;
    let synth = fixture
        .mock_synthesize_error(
            503,
            r#"{"error":{"code":503,"message":"The service is currently unavailable.","status":"UNAVAILABLE"}}"#,
        )
        .await;

    assert!(provider
        .get_tts_audio("hello", "en-US", &TtsOptions::new())
        .await
        .is_none());
    synth.assert_async().await;
}

#[tokio::test]
async fn key_file_relative_to_host_config_dir() {
    let fixture = MockServerFixture::new().await;
    let dir = tempfile::tempdir().unwrap();
    fixture.write_authorized_user(dir.path());
    let token = fixture
        .mock_token(
            "refresh_token",
            200,
            json!({"access_token": "user-token", "expires_in": 3600}),
        )
        .await;
    let voices = fixture.mock_voices("user-token", voices_body(), 1).await;

    let host = HostContext::new(dir.path());
    let config = ProviderConfig::from_value(&json!({"key_file": "authorized_user.json"})).unwrap();
    let provider = get_engine_at(&host, &config, &fixture.base_url)
        .await
        .expect("engine");
    assert_eq!(provider.supported_languages().len(), 3);
    token.assert_async().await;
    voices.assert_async().await;
}

#[tokio::test]
async fn missing_key_file_makes_no_remote_call() {
    let fixture = MockServerFixture::new().await;
    let dir = tempfile::tempdir().unwrap();
    let token = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", "/token")
            .expect(0)
            .create_async()
            .await
    };
    let voices = {
        let mut server = fixture.server.lock().await;
        server
            .mock("GET", "/v1/voices")
            .expect(0)
            .create_async()
            .await
    };

    let host = HostContext::new(dir.path());
    let config = ProviderConfig::from_value(&json!({"key_file": "missing.json"})).unwrap();
    assert!(get_engine_at(&host, &config, &fixture.base_url)
        .await
        .is_none());
    token.assert_async().await;
    voices.assert_async().await;
}
