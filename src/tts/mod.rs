//! TTS（文字转语音）模块：宿主平台可插拔的语音合成提供者。
//!
//! Text-to-speech provider surface the host platform talks to.

mod provider;
mod request;
mod types;

pub use provider::{
    get_engine, get_engine_at, get_engine_with_api, GoogleCloudTtsProvider, PROVIDER_NAME,
    SYNTHESIS_TIMEOUT,
};
pub use request::build_request;
pub use types::{AudioFormat, AudioOutput, Voice};

use async_trait::async_trait;

use crate::options::TtsOptions;

/// Capability interface a speech-synthesis provider offers its host.
///
/// Failures never escape: both lookups and synthesis return `None` when
/// nothing was produced, and the provider logs the reason.
#[async_trait]
pub trait TtsProvider: Send + Sync {
    fn name(&self) -> &str;

    fn default_language(&self) -> &str;

    fn supported_languages(&self) -> Vec<String>;

    /// Option keys accepted by [`TtsProvider::get_tts_audio`].
    fn supported_options(&self) -> &[&'static str];

    fn default_options(&self) -> TtsOptions;

    /// Voices available for `language`, `None` if the language is unknown.
    fn supported_voices(&self, language: &str) -> Option<Vec<Voice>>;

    async fn get_tts_audio(
        &self,
        message: &str,
        language: &str,
        options: &TtsOptions,
    ) -> Option<AudioOutput>;
}
