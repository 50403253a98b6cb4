//! Google Cloud TTS provider and its setup.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

use super::request::build_request;
use super::types::{AudioOutput, Voice};
use super::TtsProvider;
use crate::client::{SpeechApi, TextToSpeechClient, DEFAULT_BASE_URL};
use crate::config::{ProviderConfig, CONF_KEY_FILE};
use crate::host::HostContext;
use crate::options::{ResolvedOptions, TtsOptions, SUPPORTED_OPTIONS};
use crate::voices::VoiceCatalog;
use crate::{Error, ErrorContext, Result};

pub const PROVIDER_NAME: &str = "Google Cloud TTS";

/// Upper bound on a single synthesis call.
pub const SYNTHESIS_TIMEOUT: Duration = Duration::from_secs(10);

/// Set up the provider: build an authenticated client, then fetch the voice catalog.
///
/// Returns `None` (after logging why) when the key file is missing or
/// unreadable, or when the voice listing fails.
pub async fn get_engine(
    host: &HostContext,
    config: &ProviderConfig,
) -> Option<GoogleCloudTtsProvider> {
    get_engine_at(host, config, DEFAULT_BASE_URL).await
}

/// Same as [`get_engine`] against another API endpoint, e.g. a regional one
/// such as `https://eu-texttospeech.googleapis.com`.
pub async fn get_engine_at(
    host: &HostContext,
    config: &ProviderConfig,
    base_url: &str,
) -> Option<GoogleCloudTtsProvider> {
    let client = match build_client(host, config, base_url) {
        Ok(client) => client,
        Err(err) => {
            error!("{}", err);
            return None;
        }
    };
    get_engine_with_api(config, Arc::new(client)).await
}

/// Same as [`get_engine`] with a caller-supplied API handle.
pub async fn get_engine_with_api(
    config: &ProviderConfig,
    api: Arc<dyn SpeechApi>,
) -> Option<GoogleCloudTtsProvider> {
    match VoiceCatalog::fetch(api.as_ref()).await {
        Ok(voices) => {
            info!(languages = voices.len(), "Google Cloud TTS voice catalog loaded");
            Some(GoogleCloudTtsProvider::new(api, voices, config))
        }
        Err(err) => {
            error!("Error from calling list_voices: {}", err);
            None
        }
    }
}

fn build_client(
    host: &HostContext,
    config: &ProviderConfig,
    base_url: &str,
) -> Result<TextToSpeechClient> {
    let builder = TextToSpeechClient::builder().base_url(base_url);
    match config.key_file.as_deref() {
        Some(key_file) => {
            let path = host.path(key_file);
            if !path.is_file() {
                return Err(Error::configuration_with_context(
                    format!("File {} doesn't exist", path.display()),
                    ErrorContext::new()
                        .with_field_path(CONF_KEY_FILE)
                        .with_source("setup"),
                ));
            }
            builder.key_file(&path).build()
        }
        None => builder.build(),
    }
}

/// The Google Cloud TTS API provider.
#[derive(Debug, Clone)]
pub struct GoogleCloudTtsProvider {
    api: Arc<dyn SpeechApi>,
    voices: VoiceCatalog,
    language: String,
    defaults: ResolvedOptions,
}

impl GoogleCloudTtsProvider {
    pub fn new(api: Arc<dyn SpeechApi>, voices: VoiceCatalog, config: &ProviderConfig) -> Self {
        Self {
            api,
            voices,
            language: config.language.clone(),
            defaults: config.default_options(),
        }
    }

    pub fn voices(&self) -> &VoiceCatalog {
        &self.voices
    }

    /// Merge `options` over the configured defaults.
    pub fn resolve_options(&self, options: &TtsOptions) -> Result<ResolvedOptions> {
        self.defaults.merge(options)
    }

    /// Like [`TtsProvider::get_tts_audio`], but keeps the error.
    pub async fn synthesize(
        &self,
        message: &str,
        language: &str,
        options: &TtsOptions,
    ) -> Result<AudioOutput> {
        let resolved = self.resolve_options(options)?;
        self.synthesize_resolved(message, language, &resolved).await
    }

    async fn synthesize_resolved(
        &self,
        message: &str,
        language: &str,
        options: &ResolvedOptions,
    ) -> Result<AudioOutput> {
        let request = build_request(message, language, options);
        debug!(
            language = %request.voice.language_code,
            voice = ?request.voice.name,
            encoding = %options.encoding,
            "synthesizing speech"
        );
        let response = tokio::time::timeout(
            SYNTHESIS_TIMEOUT,
            self.api.synthesize_speech(&request, SYNTHESIS_TIMEOUT),
        )
        .await
        .map_err(|_| Error::timeout("text:synthesize", SYNTHESIS_TIMEOUT))??;
        Ok(AudioOutput::new(
            options.encoding.into(),
            response.audio_content,
        ))
    }
}

#[async_trait]
impl TtsProvider for GoogleCloudTtsProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn default_language(&self) -> &str {
        &self.language
    }

    fn supported_languages(&self) -> Vec<String> {
        self.voices.languages().map(String::from).collect()
    }

    fn supported_options(&self) -> &[&'static str] {
        SUPPORTED_OPTIONS
    }

    fn default_options(&self) -> TtsOptions {
        self.defaults.to_map()
    }

    fn supported_voices(&self, language: &str) -> Option<Vec<Voice>> {
        let voices = self.voices.get(language)?;
        if voices.is_empty() {
            return None;
        }
        Some(voices.iter().map(|v| Voice::new(v.clone(), v.clone())).collect())
    }

    async fn get_tts_audio(
        &self,
        message: &str,
        language: &str,
        options: &TtsOptions,
    ) -> Option<AudioOutput> {
        let resolved = match self.resolve_options(options) {
            Ok(resolved) => resolved,
            Err(err) => {
                error!(
                    "Error: {} when validating options: {}",
                    err,
                    serde_json::Value::Object(options.clone())
                );
                return None;
            }
        };

        match self.synthesize_resolved(message, language, &resolved).await {
            Ok(audio) => Some(audio),
            Err(err) => {
                error!("Error occurred during Google Cloud TTS call: {}", err);
                None
            }
        }
    }
}
