//! 平台配置：校验配置块并填充默认值。
//!
//! Platform configuration block.
//!
//! The host hands the provider a map (parsed from YAML or JSON); every key is
//! validated with the same rules the per-call options use, and missing keys
//! take the defaults below.

use serde_json::{Map, Value};
use std::path::Path;

use crate::options::{
    validate, AudioEncoding, DeviceProfile, ResolvedOptions, SsmlVoiceGender, TextType,
    CONF_ENCODING, CONF_GAIN, CONF_GENDER, CONF_PITCH, CONF_PROFILES, CONF_SPEED,
    CONF_TEXT_TYPE, CONF_VOICE,
};
use crate::{Error, ErrorContext, Result};

pub const CONF_PLATFORM: &str = "platform";
pub const CONF_KEY_FILE: &str = "key_file";
pub const CONF_LANG: &str = "language";

pub const DEFAULT_LANG: &str = "en-US";

const KNOWN_KEYS: &[&str] = &[
    CONF_PLATFORM,
    CONF_KEY_FILE,
    CONF_LANG,
    CONF_GENDER,
    CONF_VOICE,
    CONF_ENCODING,
    CONF_SPEED,
    CONF_PITCH,
    CONF_GAIN,
    CONF_PROFILES,
    CONF_TEXT_TYPE,
];

/// Validated provider configuration. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    /// Service-account or authorized-user JSON, relative to the host config dir.
    pub key_file: Option<String>,
    pub language: String,
    pub gender: SsmlVoiceGender,
    pub voice: String,
    pub encoding: AudioEncoding,
    pub speed: f64,
    pub pitch: f64,
    pub gain: f64,
    pub profiles: Vec<DeviceProfile>,
    pub text_type: TextType,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        let options = ResolvedOptions::default();
        Self {
            key_file: None,
            language: DEFAULT_LANG.to_string(),
            gender: options.gender,
            voice: options.voice,
            encoding: options.encoding,
            speed: options.speed,
            pitch: options.pitch,
            gain: options.gain,
            profiles: options.profiles,
            text_type: options.text_type,
        }
    }
}

impl ProviderConfig {
    /// Validate a configuration map; `null` is treated as an empty block.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Self::from_map(&Map::new()),
            Value::Object(map) => Self::from_map(map),
            other => Err(Error::configuration_with_context(
                "configuration block must be a mapping",
                ErrorContext::new().with_details(other.to_string()),
            )),
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(yaml)?;
        Self::from_value(&value)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
        if let Some(unknown) = map.keys().find(|k| !KNOWN_KEYS.contains(&k.as_str())) {
            return Err(Error::configuration_with_context(
                format!("extra keys not allowed: {}", unknown),
                ErrorContext::new()
                    .with_field_path(unknown.clone())
                    .with_source("config_validator"),
            ));
        }

        let key_file = match map.get(CONF_KEY_FILE) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(Error::configuration_with_context(
                    "expected a string",
                    ErrorContext::new()
                        .with_field_path(CONF_KEY_FILE)
                        .with_details(other.to_string()),
                ))
            }
        };

        let language = match map.get(CONF_LANG) {
            Some(v) => validate::language(CONF_LANG, v)?,
            None => DEFAULT_LANG.to_string(),
        };

        // Same rules as per-call overrides, merged over the built-in defaults.
        let options = ResolvedOptions::default().merge_known(map)?;

        Ok(Self {
            key_file,
            language,
            gender: options.gender,
            voice: options.voice,
            encoding: options.encoding,
            speed: options.speed,
            pitch: options.pitch,
            gain: options.gain,
            profiles: options.profiles,
            text_type: options.text_type,
        })
    }

    /// Provider-level defaults the per-call overrides are merged over.
    pub fn default_options(&self) -> ResolvedOptions {
        ResolvedOptions {
            gender: self.gender,
            voice: self.voice.clone(),
            encoding: self.encoding,
            speed: self.speed,
            pitch: self.pitch,
            gain: self.gain,
            profiles: self.profiles.clone(),
            text_type: self.text_type,
        }
    }
}
