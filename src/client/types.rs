//! Wire types of the Text-to-Speech v1 REST API.

use serde::{Deserialize, Serialize};

use crate::options::{AudioEncoding, DeviceProfile, SsmlVoiceGender};

/// Body of `POST /v1/text:synthesize`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeSpeechRequest {
    pub input: SynthesisInput,
    pub voice: VoiceSelectionParams,
    pub audio_config: AudioConfig,
}

/// Either plain text or SSML markup; serialized as `{"text": ..}` / `{"ssml": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SynthesisInput {
    Text(String),
    Ssml(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSelectionParams {
    pub language_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssml_gender: Option<SsmlVoiceGender>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioConfig {
    pub audio_encoding: AudioEncoding,
    pub speaking_rate: f64,
    pub pitch: f64,
    pub volume_gain_db: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub effects_profile_id: Vec<DeviceProfile>,
}

/// Decoded synthesis response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizeSpeechResponse {
    pub audio_content: Vec<u8>,
}

/// Raw synthesis response; `audioContent` is base64.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SynthesizeSpeechBody {
    #[serde(default)]
    pub audio_content: String,
}

/// Body of `GET /v1/voices`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ListVoicesResponse {
    #[serde(default)]
    pub voices: Vec<VoiceInfo>,
}

/// One voice as reported by the vendor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceInfo {
    #[serde(default)]
    pub language_codes: Vec<String>,
    pub name: String,
    // Kept as a string: the vendor may add genders this crate does not model.
    #[serde(default)]
    pub ssml_gender: Option<String>,
    #[serde(default)]
    pub natural_sample_rate_hertz: Option<u32>,
}

impl VoiceInfo {
    pub fn new(language_code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            language_codes: vec![language_code.into()],
            name: name.into(),
            ssml_gender: None,
            natural_sample_rate_hertz: None,
        }
    }
}
