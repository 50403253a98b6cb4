//! Credential files exchanged for access tokens at the mock token endpoint.

use crate::integration::mock_server::{voices_body, MockServerFixture};
use gcloud_tts_provider::client::SpeechApi;
use gcloud_tts_provider::{get_engine_with_api, Error, ProviderConfig};
use mockito::Matcher;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn authorized_user_token_is_fetched_once_and_cached() {
    let fixture = MockServerFixture::new().await;
    let dir = tempfile::tempdir().unwrap();
    let key_file = fixture.write_authorized_user(dir.path());

    let token = fixture
        .mock_token(
            "refresh_token",
            200,
            json!({"access_token": "user-token", "expires_in": 3599, "token_type": "Bearer"}),
        )
        .await;
    let voices = fixture.mock_voices("user-token", voices_body(), 2).await;

    let client = fixture.key_file_client(&key_file);
    assert_eq!(client.list_voices().await.unwrap().len(), 3);
    assert_eq!(client.list_voices().await.unwrap().len(), 3);

    token.assert_async().await;
    voices.assert_async().await;
}

#[tokio::test]
async fn service_account_exchanges_signed_assertion() {
    let fixture = MockServerFixture::new().await;
    let dir = tempfile::tempdir().unwrap();
    let key_file = fixture.write_service_account(dir.path());

    let token = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", "/token")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded(
                    "grant_type".into(),
                    "urn:ietf:params:oauth:grant-type:jwt-bearer".into(),
                ),
                // header.claims.signature
                Matcher::Regex(r"assertion=[\w-]+\.[\w-]+\.[\w-]+".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"access_token":"sa-token","expires_in":3600}"#)
            .expect(1)
            .create_async()
            .await
    };
    let voices = fixture.mock_voices("sa-token", voices_body(), 1).await;

    let client = fixture.key_file_client(&key_file);
    assert_eq!(client.list_voices().await.unwrap().len(), 3);

    token.assert_async().await;
    voices.assert_async().await;
}

#[tokio::test]
async fn rejected_refresh_is_an_authentication_error_and_no_engine() {
    let fixture = MockServerFixture::new().await;
    let dir = tempfile::tempdir().unwrap();
    let key_file = fixture.write_authorized_user(dir.path());

    let _token = fixture
        .mock_token(
            "refresh_token",
            400,
            json!({"error": "invalid_grant", "error_description": "Token has been expired or revoked."}),
        )
        .await;

    let client = fixture.key_file_client(&key_file);
    let err = client.list_voices().await.unwrap_err();
    assert!(matches!(err, Error::Authentication { .. }), "unexpected error: {}", err);

    // Setup hits the same rejecting endpoint again.
    assert!(get_engine_with_api(&ProviderConfig::default(), Arc::new(client))
        .await
        .is_none());
}
