//! TTS (Text-to-Speech) types.

use crate::options::AudioEncoding;

/// Audio handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioOutput {
    pub data: Vec<u8>,
    pub format: AudioFormat,
}

impl AudioOutput {
    pub fn new(format: AudioFormat, data: Vec<u8>) -> Self {
        Self { data, format }
    }

    /// File-extension hint for the host's media cache.
    pub fn extension(&self) -> &'static str {
        self.format.extension()
    }

    /// `(extension, bytes)`, the shape hosts store.
    pub fn into_parts(self) -> (&'static str, Vec<u8>) {
        (self.format.extension(), self.data)
    }
}

/// Container the host should assume for the returned bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
    Ogg,
    Wav,
}

impl AudioFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Ogg => "ogg",
            Self::Wav => "wav",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Ogg => "audio/ogg",
            Self::Wav => "audio/wav",
        }
    }
}

impl From<AudioEncoding> for AudioFormat {
    fn from(encoding: AudioEncoding) -> Self {
        match encoding {
            AudioEncoding::Mp3 => Self::Mp3,
            AudioEncoding::OggOpus => Self::Ogg,
            _ => Self::Wav,
        }
    }
}

/// A selectable voice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub voice_id: String,
    pub name: String,
}

impl Voice {
    pub fn new(voice_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            voice_id: voice_id.into(),
            name: name.into(),
        }
    }
}
