//! Voice catalog: language tag to the voice names available for it.

use std::collections::BTreeMap;

use crate::client::{SpeechApi, VoiceInfo};
use crate::Result;

/// Read-only catalog fetched once at setup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceCatalog {
    voices: BTreeMap<String, Vec<String>>,
}

impl VoiceCatalog {
    /// Files each voice under the first language code the vendor lists for it.
    pub fn from_voices<'a, I>(voices: I) -> Self
    where
        I: IntoIterator<Item = &'a VoiceInfo>,
    {
        let mut catalog: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for voice in voices {
            if let Some(language) = voice.language_codes.first() {
                catalog
                    .entry(language.clone())
                    .or_default()
                    .push(voice.name.clone());
            }
        }
        Self { voices: catalog }
    }

    pub async fn fetch(api: &dyn SpeechApi) -> Result<Self> {
        let voices = api.list_voices().await?;
        Ok(Self::from_voices(&voices))
    }

    /// Voice names for `language`, `None` when the language is unknown.
    pub fn get(&self, language: &str) -> Option<&[String]> {
        self.voices.get(language).map(Vec::as_slice)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.voices.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}
