//! Translate resolved options into a vendor synthesis request.

use crate::client::{AudioConfig, SynthesisInput, SynthesizeSpeechRequest, VoiceSelectionParams};
use crate::options::{validate::voice_language, ResolvedOptions, TextType};

/// Build the request for `message` in `language`.
///
/// An explicit voice wins over gender, and over `language` when the voice
/// belongs to a different one.
pub fn build_request(
    message: &str,
    language: &str,
    options: &ResolvedOptions,
) -> SynthesizeSpeechRequest {
    let mut language_code = language.to_string();
    let mut ssml_gender = Some(options.gender);
    let mut name = None;

    if !options.voice.is_empty() {
        ssml_gender = None;
        if !options.voice.starts_with(language) {
            if let Some(prefix) = voice_language(&options.voice) {
                language_code = prefix.to_string();
            }
        }
        name = Some(options.voice.clone());
    }

    let input = match options.text_type {
        TextType::Text => SynthesisInput::Text(message.to_string()),
        TextType::Ssml => SynthesisInput::Ssml(message.to_string()),
    };

    SynthesizeSpeechRequest {
        input,
        voice: VoiceSelectionParams {
            language_code,
            name,
            ssml_gender,
        },
        audio_config: AudioConfig {
            audio_encoding: options.encoding,
            speaking_rate: options.speed,
            pitch: options.pitch,
            volume_gain_db: options.gain,
            effects_profile_id: options.profiles.clone(),
        },
    }
}
