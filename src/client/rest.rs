//! Text-to-Speech REST client.

use async_trait::async_trait;
use base64::Engine as _;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use super::types::{
    ListVoicesResponse, SynthesizeSpeechBody, SynthesizeSpeechRequest, SynthesizeSpeechResponse,
    VoiceInfo,
};
use super::SpeechApi;
use crate::auth::{CredentialsFile, GoogleTokenProvider, TokenProvider};
use crate::transport::HttpTransport;
use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://texttospeech.googleapis.com";

const VOICES_PATH: &str = "/v1/voices";
const SYNTHESIZE_PATH: &str = "/v1/text:synthesize";

/// Authenticated client for the Text-to-Speech v1 API.
#[derive(Debug, Clone)]
pub struct TextToSpeechClient {
    transport: HttpTransport,
}

impl TextToSpeechClient {
    pub fn builder() -> TextToSpeechClientBuilder {
        TextToSpeechClientBuilder::new()
    }

    /// Client authenticated with a service-account (or authorized-user) JSON file.
    pub fn from_service_account_json(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder().key_file(path).build()
    }

    /// Client authenticated with application default credentials.
    pub fn with_default_credentials() -> Result<Self> {
        Self::builder().build()
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }
}

#[async_trait]
impl SpeechApi for TextToSpeechClient {
    async fn list_voices(&self) -> Result<Vec<VoiceInfo>> {
        let response: ListVoicesResponse = self.transport.get_json(VOICES_PATH).await?;
        Ok(response.voices)
    }

    async fn synthesize_speech(
        &self,
        request: &SynthesizeSpeechRequest,
        timeout: Duration,
    ) -> Result<SynthesizeSpeechResponse> {
        let body: SynthesizeSpeechBody = self
            .transport
            .post_json(SYNTHESIZE_PATH, request, Some(timeout))
            .await?;
        let audio_content = base64::engine::general_purpose::STANDARD.decode(body.audio_content)?;
        Ok(SynthesizeSpeechResponse { audio_content })
    }
}

pub struct TextToSpeechClientBuilder {
    key_file: Option<std::path::PathBuf>,
    token_provider: Option<Arc<dyn TokenProvider>>,
    base_url: Option<String>,
    timeout_secs: u64,
}

impl TextToSpeechClientBuilder {
    pub fn new() -> Self {
        Self {
            key_file: None,
            token_provider: None,
            base_url: None,
            timeout_secs: 60,
        }
    }

    pub fn key_file(mut self, path: impl AsRef<Path>) -> Self {
        self.key_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use a caller-supplied token source instead of Google credentials.
    pub fn token_provider(mut self, provider: Arc<dyn TokenProvider>) -> Self {
        self.token_provider = Some(provider);
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Default timeout for calls that do not carry their own (voice listing).
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn build(self) -> Result<TextToSpeechClient> {
        if self.timeout_secs == 0 {
            return Err(Error::configuration("timeout_secs must be greater than zero"));
        }
        let tokens: Arc<dyn TokenProvider> = match (self.token_provider, self.key_file) {
            (Some(provider), _) => provider,
            (None, Some(path)) => {
                let credentials = CredentialsFile::from_file(&path)?;
                Arc::new(GoogleTokenProvider::from_credentials(credentials)?)
            }
            (None, None) => Arc::new(GoogleTokenProvider::application_default()?),
        };
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let transport =
            HttpTransport::new(&base_url, tokens, Duration::from_secs(self.timeout_secs))?;
        Ok(TextToSpeechClient { transport })
    }
}

impl Default for TextToSpeechClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
