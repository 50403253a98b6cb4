//! # gcloud-tts-provider
//!
//! Google Cloud Text-to-Speech 语音合成提供者，供智能家居宿主平台以插件方式接入。
//!
//! Google Cloud Text-to-Speech as a pluggable speech-synthesis provider for a
//! home-automation host.
//!
//! ## Overview
//!
//! The host validates a configuration block into a [`ProviderConfig`], calls
//! [`get_engine`] once, and then drives the returned provider through the
//! [`TtsProvider`] trait: voice lookup per language, and synthesis of one
//! utterance at a time with sparse per-call option overrides.
//!
//! Nothing here panics or propagates errors to the host at the provider
//! boundary: setup yields `None` when no engine is available and synthesis
//! yields `None` when no audio was produced. The reason is logged through
//! `tracing`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gcloud_tts_provider::{get_engine, HostContext, ProviderConfig, TtsOptions, TtsProvider};
//!
//! #[tokio::main]
//! async fn main() -> gcloud_tts_provider::Result<()> {
//!     gcloud_tts_provider::logging::init();
//!     let config = ProviderConfig::from_yaml_str("key_file: googlecloud.json\nencoding: ogg_opus")?;
//!     let host = HostContext::new("/config");
//!
//!     if let Some(provider) = get_engine(&host, &config).await {
//!         let audio = provider
//!             .get_tts_audio("The front door is open", "en-US", &TtsOptions::new())
//!             .await;
//!         if let Some(audio) = audio {
//!             println!("{} bytes of {}", audio.data.len(), audio.extension());
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Configuration block validation and defaults |
//! | [`options`] | Vendor enums, acoustic bounds, per-call option resolution |
//! | [`tts`] | Provider trait, Google provider, request translation |
//! | [`client`] | REST client and the [`SpeechApi`] seam |
//! | [`auth`] | Credential files and OAuth2 token providers |
//! | [`voices`] | Voice catalog |
//! | [`transport`] | Authenticated JSON transport |

pub mod auth;
pub mod client;
pub mod config;
pub mod host;
pub mod logging;
pub mod options;
pub mod transport;
pub mod tts;
pub mod voices;

pub use client::{SpeechApi, TextToSpeechClient};
pub use config::ProviderConfig;
pub use host::HostContext;
pub use options::{ResolvedOptions, TtsOptions};
pub use tts::{
    get_engine, get_engine_at, get_engine_with_api, AudioFormat, AudioOutput, GoogleCloudTtsProvider,
    TtsProvider, Voice,
};
pub use voices::VoiceCatalog;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
