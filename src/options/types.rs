//! Vendor enumerations and acoustic bounds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender requested for the synthesized voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SsmlVoiceGender {
    SsmlVoiceGenderUnspecified,
    Male,
    Female,
    Neutral,
}

impl SsmlVoiceGender {
    pub const ALL: &'static [SsmlVoiceGender] = &[
        Self::SsmlVoiceGenderUnspecified,
        Self::Male,
        Self::Female,
        Self::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SsmlVoiceGenderUnspecified => "SSML_VOICE_GENDER_UNSPECIFIED",
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Neutral => "NEUTRAL",
        }
    }
}

/// Output encoding of the synthesized audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioEncoding {
    AudioEncodingUnspecified,
    Linear16,
    Mp3,
    OggOpus,
    Mulaw,
    Alaw,
}

impl AudioEncoding {
    pub const ALL: &'static [AudioEncoding] = &[
        Self::AudioEncodingUnspecified,
        Self::Linear16,
        Self::Mp3,
        Self::OggOpus,
        Self::Mulaw,
        Self::Alaw,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AudioEncodingUnspecified => "AUDIO_ENCODING_UNSPECIFIED",
            Self::Linear16 => "LINEAR16",
            Self::Mp3 => "MP3",
            Self::OggOpus => "OGG_OPUS",
            Self::Mulaw => "MULAW",
            Self::Alaw => "ALAW",
        }
    }
}

/// How the input message is interpreted by the vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextType {
    Text,
    Ssml,
}

impl TextType {
    pub const ALL: &'static [TextType] = &[Self::Text, Self::Ssml];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Ssml => "ssml",
        }
    }
}

/// Playback hardware class the vendor post-processes audio for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceProfile {
    WearableClassDevice,
    HandsetClassDevice,
    HeadphoneClassDevice,
    SmallBluetoothSpeakerClassDevice,
    MediumBluetoothSpeakerClassDevice,
    LargeHomeEntertainmentClassDevice,
    LargeAutomotiveClassDevice,
    TelephonyClassApplication,
}

impl DeviceProfile {
    pub const ALL: &'static [DeviceProfile] = &[
        Self::WearableClassDevice,
        Self::HandsetClassDevice,
        Self::HeadphoneClassDevice,
        Self::SmallBluetoothSpeakerClassDevice,
        Self::MediumBluetoothSpeakerClassDevice,
        Self::LargeHomeEntertainmentClassDevice,
        Self::LargeAutomotiveClassDevice,
        Self::TelephonyClassApplication,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WearableClassDevice => "wearable-class-device",
            Self::HandsetClassDevice => "handset-class-device",
            Self::HeadphoneClassDevice => "headphone-class-device",
            Self::SmallBluetoothSpeakerClassDevice => "small-bluetooth-speaker-class-device",
            Self::MediumBluetoothSpeakerClassDevice => "medium-bluetooth-speaker-class-device",
            Self::LargeHomeEntertainmentClassDevice => "large-home-entertainment-class-device",
            Self::LargeAutomotiveClassDevice => "large-automotive-class-device",
            Self::TelephonyClassApplication => "telephony-class-application",
        }
    }
}

/// Shared lookup/display behaviour of the string-backed enums above.
pub trait VendorEnum: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn name(&self) -> &'static str;

    /// Exact match against the wire name; callers normalise case first.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.name() == name)
    }

    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.name()).collect()
    }
}

macro_rules! vendor_enum {
    ($($ty:ty),*) => {
        $(
            impl VendorEnum for $ty {
                const ALL: &'static [Self] = <$ty>::ALL;

                fn name(&self) -> &'static str {
                    self.as_str()
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

vendor_enum!(SsmlVoiceGender, AudioEncoding, TextType, DeviceProfile);

/// Inclusive bounds a tuning value is clamped into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatRange {
    pub min: f64,
    pub max: f64,
}

impl FloatRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

pub const SPEED_RANGE: FloatRange = FloatRange::new(0.25, 4.0);
pub const PITCH_RANGE: FloatRange = FloatRange::new(-20.0, 20.0);
pub const GAIN_RANGE: FloatRange = FloatRange::new(-96.0, 16.0);
