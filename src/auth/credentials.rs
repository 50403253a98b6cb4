//! Credential files and ambient credential discovery.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::{Error, ErrorContext, Result};

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Environment variable consulted first when no key file is configured.
pub const CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// A Google credentials JSON document, discriminated by its `type` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialsFile {
    ServiceAccount(ServiceAccountKey),
    AuthorizedUser(AuthorizedUser),
}

#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub token_uri: Option<String>,
}

impl ServiceAccountKey {
    pub fn token_uri(&self) -> &str {
        self.token_uri.as_deref().unwrap_or(DEFAULT_TOKEN_URI)
    }
}

// Keeps the PEM out of logs.
impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .field("private_key_id", &self.private_key_id)
            .field("project_id", &self.project_id)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

/// gcloud user credentials (`gcloud auth application-default login`).
#[derive(Clone, Deserialize)]
pub struct AuthorizedUser {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    #[serde(default)]
    pub token_uri: Option<String>,
}

impl AuthorizedUser {
    pub fn token_uri(&self) -> &str {
        self.token_uri.as_deref().unwrap_or(DEFAULT_TOKEN_URI)
    }
}

impl fmt::Debug for AuthorizedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizedUser")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

impl CredentialsFile {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid credentials JSON: {}", e),
                ErrorContext::new().with_source("credentials"),
            )
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration_with_context(
                format!("Failed to read credentials file: {}", e),
                ErrorContext::new()
                    .with_details(path.display().to_string())
                    .with_source("credentials"),
            )
        })?;
        Self::from_json_str(&content).map_err(|e| match e {
            Error::Configuration { message, context } => Error::Configuration {
                message,
                context: context.with_details(path.display().to_string()),
            },
            other => other,
        })
    }
}

/// Where access tokens come from.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    /// An explicit, already-parsed credentials file.
    Explicit(CredentialsFile),
    /// Environment variable, gcloud well-known file, then the GCE metadata server.
    ApplicationDefault,
}

/// gcloud's application-default credentials location.
pub fn well_known_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join(".config")
            .join("gcloud")
            .join("application_default_credentials.json")
    })
}

/// Resolve ambient credentials to a file, or `None` when only the metadata
/// server is left to try.
pub fn find_ambient_credentials() -> Result<Option<CredentialsFile>> {
    if let Ok(path) = std::env::var(CREDENTIALS_ENV) {
        if !path.trim().is_empty() {
            return CredentialsFile::from_file(path).map(Some);
        }
    }
    if let Some(path) = well_known_file() {
        if path.is_file() {
            return CredentialsFile::from_file(path).map(Some);
        }
    }
    Ok(None)
}
