//! Mock HTTP server setup for integration tests

use gcloud_tts_provider::auth::StaticTokenProvider;
use gcloud_tts_provider::TextToSpeechClient;
use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

pub const TEST_TOKEN: &str = "test-token";

/// Test fixture that manages a mock server standing in for both the
/// Text-to-Speech API and the OAuth2 token endpoint.
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    pub fn token_uri(&self) -> String {
        format!("{}/token", self.base_url)
    }

    /// Client pointed at the mock server, authenticating with [`TEST_TOKEN`].
    pub fn static_token_client(&self) -> TextToSpeechClient {
        TextToSpeechClient::builder()
            .token_provider(Arc::new(StaticTokenProvider::new(TEST_TOKEN)))
            .base_url(&self.base_url)
            .build()
            .expect("client")
    }

    /// Client pointed at the mock server, authenticating with a credentials file.
    pub fn key_file_client(&self, key_file: &Path) -> TextToSpeechClient {
        TextToSpeechClient::builder()
            .key_file(key_file)
            .base_url(&self.base_url)
            .build()
            .expect("client")
    }

    pub async fn mock_voices(&self, token: &str, body: Value, hits: usize) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("GET", "/v1/voices")
            .match_header("authorization", format!("Bearer {}", token).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(hits)
            .create_async()
            .await
    }

    /// Synthesis mock returning `audio` base64-encoded, when the body contains `expected`.
    pub async fn mock_synthesize(&self, expected: Value, audio: &[u8]) -> Mock {
        use base64::Engine as _;
        let encoded = base64::engine::general_purpose::STANDARD.encode(audio);
        let mut server = self.server.lock().await;
        server
            .mock("POST", "/v1/text:synthesize")
            .match_header("authorization", Matcher::Regex("^Bearer .+".into()))
            .match_body(Matcher::PartialJson(expected))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::json!({ "audioContent": encoded }).to_string())
            .expect(1)
            .create_async()
            .await
    }

    pub async fn mock_synthesize_error(&self, status: usize, error_body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", "/v1/text:synthesize")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(error_body)
            .expect(1)
            .create_async()
            .await
    }

    pub async fn mock_token(&self, grant_type: &str, status: usize, body: Value) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", "/token")
            .match_body(Matcher::UrlEncoded("grant_type".into(), grant_type.into()))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(1)
            .create_async()
            .await
    }

    /// Write an `authorized_user` credentials file whose token endpoint is this server.
    pub fn write_authorized_user(&self, dir: &Path) -> PathBuf {
        let creds = serde_json::json!({
            "type": "authorized_user",
            "client_id": "client-id.apps.googleusercontent.com",
            "client_secret": "client-secret",
            "refresh_token": "refresh-token",
            "token_uri": self.token_uri(),
        });
        let path = dir.join("authorized_user.json");
        std::fs::write(&path, creds.to_string()).expect("write credentials");
        path
    }

    /// Write the fixture service account key with its token endpoint redirected here.
    pub fn write_service_account(&self, dir: &Path) -> PathBuf {
        let mut creds: Value =
            serde_json::from_str(include_str!("../fixtures/service_account.json"))
                .expect("fixture json");
        creds["token_uri"] = Value::String(self.token_uri());
        let path = dir.join("service_account.json");
        std::fs::write(&path, creds.to_string()).expect("write credentials");
        path
    }
}

pub fn voices_body() -> Value {
    serde_json::json!({
        "voices": [
            {"languageCodes": ["en-US"], "name": "en-US-Wavenet-D",
             "ssmlGender": "MALE", "naturalSampleRateHertz": 24000},
            {"languageCodes": ["en-GB"], "name": "en-GB-Standard-A",
             "ssmlGender": "FEMALE", "naturalSampleRateHertz": 24000},
            {"languageCodes": ["nl-NL"], "name": "nl-NL-Standard-B",
             "ssmlGender": "MALE", "naturalSampleRateHertz": 24000}
        ]
    })
}
