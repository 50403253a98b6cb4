//! 厂商 API 客户端：语音列表与语音合成。
//!
//! Vendor API client: voice listing and speech synthesis.
//!
//! [`SpeechApi`] is the seam the provider talks to; [`TextToSpeechClient`]
//! implements it over the REST API, and hosts or tests can inject their own.

mod rest;
mod types;

pub use rest::{TextToSpeechClient, TextToSpeechClientBuilder, DEFAULT_BASE_URL};
pub use types::{
    AudioConfig, ListVoicesResponse, SynthesisInput, SynthesizeSpeechRequest,
    SynthesizeSpeechResponse, VoiceInfo, VoiceSelectionParams,
};

use async_trait::async_trait;
use std::time::Duration;

use crate::Result;

#[async_trait]
pub trait SpeechApi: Send + Sync + std::fmt::Debug {
    /// All voices the vendor offers.
    async fn list_voices(&self) -> Result<Vec<VoiceInfo>>;

    /// Synthesize one utterance; implementations must give up after `timeout`.
    async fn synthesize_speech(
        &self,
        request: &SynthesizeSpeechRequest,
        timeout: Duration,
    ) -> Result<SynthesizeSpeechResponse>;
}
