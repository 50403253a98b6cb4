//! 合成选项：厂商枚举、取值范围，以及每次调用的覆盖项解析。
//!
//! Synthesis options: vendor enums, acoustic bounds and per-call override resolution.

mod types;
pub mod validate;

pub use types::{
    AudioEncoding, DeviceProfile, FloatRange, SsmlVoiceGender, TextType, VendorEnum, GAIN_RANGE,
    PITCH_RANGE, SPEED_RANGE,
};

use serde_json::{Map, Value};

use crate::{Error, ErrorContext, Result};

pub const CONF_GENDER: &str = "gender";
pub const CONF_VOICE: &str = "voice";
pub const CONF_ENCODING: &str = "encoding";
pub const CONF_SPEED: &str = "speed";
pub const CONF_PITCH: &str = "pitch";
pub const CONF_GAIN: &str = "gain";
pub const CONF_PROFILES: &str = "profiles";
pub const CONF_TEXT_TYPE: &str = "text_type";

/// Option keys a caller may override per request.
pub const SUPPORTED_OPTIONS: &[&str] = &[
    CONF_VOICE,
    CONF_GENDER,
    CONF_ENCODING,
    CONF_SPEED,
    CONF_PITCH,
    CONF_GAIN,
    CONF_PROFILES,
    CONF_TEXT_TYPE,
];

/// Sparse per-call overrides as handed over by the host.
pub type TtsOptions = Map<String, Value>;

/// Fully populated option set for one synthesis call.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub gender: SsmlVoiceGender,
    pub voice: String,
    pub encoding: AudioEncoding,
    pub speed: f64,
    pub pitch: f64,
    pub gain: f64,
    pub profiles: Vec<DeviceProfile>,
    pub text_type: TextType,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            gender: SsmlVoiceGender::Neutral,
            voice: String::new(),
            encoding: AudioEncoding::Mp3,
            speed: 1.0,
            pitch: 0.0,
            gain: 0.0,
            profiles: Vec::new(),
            text_type: TextType::Text,
        }
    }
}

impl ResolvedOptions {
    /// Merge `overrides` over `self`, validating every override that is present.
    ///
    /// A key outside [`SUPPORTED_OPTIONS`] or the first invalid value fails
    /// the whole resolution.
    pub fn merge(&self, overrides: &TtsOptions) -> Result<Self> {
        if let Some(unknown) = overrides
            .keys()
            .find(|k| !SUPPORTED_OPTIONS.contains(&k.as_str()))
        {
            return Err(Error::validation_with_context(
                format!("extra keys not allowed: {}", unknown),
                ErrorContext::new()
                    .with_field_path(unknown.clone())
                    .with_source("option_validator"),
            ));
        }
        self.merge_known(overrides)
    }

    /// Like [`merge`](Self::merge), but only looks at the supported keys; the
    /// caller owns the check for anything else in `overrides`.
    pub(crate) fn merge_known(&self, overrides: &Map<String, Value>) -> Result<Self> {
        let mut out = self.clone();
        if let Some(v) = overrides.get(CONF_GENDER) {
            out.gender = validate::upper_enum(CONF_GENDER, v)?;
        }
        if let Some(v) = overrides.get(CONF_VOICE) {
            out.voice = validate::voice(CONF_VOICE, v)?;
        }
        if let Some(v) = overrides.get(CONF_ENCODING) {
            out.encoding = validate::upper_enum(CONF_ENCODING, v)?;
        }
        if let Some(v) = overrides.get(CONF_SPEED) {
            out.speed = validate::bounded_float(CONF_SPEED, v, SPEED_RANGE)?;
        }
        if let Some(v) = overrides.get(CONF_PITCH) {
            out.pitch = validate::bounded_float(CONF_PITCH, v, PITCH_RANGE)?;
        }
        if let Some(v) = overrides.get(CONF_GAIN) {
            out.gain = validate::bounded_float(CONF_GAIN, v, GAIN_RANGE)?;
        }
        if let Some(v) = overrides.get(CONF_PROFILES) {
            out.profiles = validate::profiles(CONF_PROFILES, v)?;
        }
        if let Some(v) = overrides.get(CONF_TEXT_TYPE) {
            out.text_type = validate::lower_enum(CONF_TEXT_TYPE, v)?;
        }
        Ok(out)
    }

    /// The option set as the host sees it (`default_options`).
    pub fn to_map(&self) -> TtsOptions {
        let mut map = Map::new();
        map.insert(CONF_GENDER.into(), Value::from(self.gender.as_str()));
        map.insert(CONF_VOICE.into(), Value::from(self.voice.clone()));
        map.insert(CONF_ENCODING.into(), Value::from(self.encoding.as_str()));
        map.insert(CONF_SPEED.into(), Value::from(self.speed));
        map.insert(CONF_PITCH.into(), Value::from(self.pitch));
        map.insert(CONF_GAIN.into(), Value::from(self.gain));
        map.insert(
            CONF_PROFILES.into(),
            Value::Array(
                self.profiles
                    .iter()
                    .map(|p| Value::from(p.as_str()))
                    .collect(),
            ),
        );
        map.insert(CONF_TEXT_TYPE.into(), Value::from(self.text_type.as_str()));
        map
    }
}
