//! OAuth2 access tokens for Google APIs.
//!
//! - Service accounts: self-signed RS256 JWT exchanged via the jwt-bearer grant.
//! - Authorized users: refresh-token grant.
//! - No file at all: the GCE metadata server.

use async_trait::async_trait;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;
use tracing::debug;

use super::credentials::{
    find_ambient_credentials, AuthorizedUser, CredentialSource, CredentialsFile,
    ServiceAccountKey,
};
use super::TokenProvider;
use crate::{Error, ErrorContext, Result};

pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

const METADATA_TOKEN_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: u64 = 3600;
const DEFAULT_EXPIRES_IN_SECS: u64 = 3600;
/// Tokens this close to expiry are refreshed.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);
const TOKEN_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: u64,
    exp: u64,
}

#[derive(Debug)]
struct CachedToken {
    value: String,
    expires_at: Instant,
}

/// Token provider backed by Google credentials, with an in-memory token cache.
#[derive(Debug)]
pub struct GoogleTokenProvider {
    http: reqwest::Client,
    source: CredentialSource,
    scope: String,
    cache: Mutex<Option<CachedToken>>,
}

impl GoogleTokenProvider {
    pub fn new(source: CredentialSource) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(TOKEN_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            http,
            source,
            scope: CLOUD_PLATFORM_SCOPE.to_string(),
            cache: Mutex::new(None),
        })
    }

    pub fn from_credentials(credentials: CredentialsFile) -> Result<Self> {
        Self::new(CredentialSource::Explicit(credentials))
    }

    pub fn application_default() -> Result<Self> {
        Self::new(CredentialSource::ApplicationDefault)
    }

    pub fn source(&self) -> &CredentialSource {
        &self.source
    }

    async fn fetch(&self) -> Result<TokenResponse> {
        let credentials = match &self.source {
            CredentialSource::Explicit(creds) => Some(creds.clone()),
            CredentialSource::ApplicationDefault => find_ambient_credentials()?,
        };
        match credentials {
            Some(CredentialsFile::ServiceAccount(key)) => self.fetch_service_account(&key).await,
            Some(CredentialsFile::AuthorizedUser(user)) => self.fetch_authorized_user(&user).await,
            None => self.fetch_metadata().await,
        }
    }

    async fn fetch_service_account(&self, key: &ServiceAccountKey) -> Result<TokenResponse> {
        let assertion = sign_assertion(key, &self.scope)?;
        debug!(client_email = %key.client_email, "exchanging service account assertion");
        let request = self.http.post(key.token_uri()).form(&[
            ("grant_type", JWT_BEARER_GRANT),
            ("assertion", assertion.as_str()),
        ]);
        token_request(request).await
    }

    async fn fetch_authorized_user(&self, user: &AuthorizedUser) -> Result<TokenResponse> {
        debug!(client_id = %user.client_id, "refreshing authorized user token");
        let request = self.http.post(user.token_uri()).form(&[
            ("grant_type", "refresh_token"),
            ("client_id", user.client_id.as_str()),
            ("client_secret", user.client_secret.as_str()),
            ("refresh_token", user.refresh_token.as_str()),
        ]);
        token_request(request).await
    }

    async fn fetch_metadata(&self) -> Result<TokenResponse> {
        debug!("requesting token from metadata server");
        let request = self
            .http
            .get(METADATA_TOKEN_URL)
            .header("Metadata-Flavor", "Google");
        token_request(request).await.map_err(|e| {
            Error::authentication_with_context(
                format!(
                    "No Google credentials found and metadata server unavailable: {}",
                    e
                ),
                ErrorContext::new().with_source("application_default_credentials"),
            )
        })
    }
}

#[async_trait]
impl TokenProvider for GoogleTokenProvider {
    async fn access_token(&self) -> Result<String> {
        let mut cache = self.cache.lock().await;
        if let Some(token) = cache.as_ref() {
            if token.expires_at > Instant::now() + EXPIRY_MARGIN {
                return Ok(token.value.clone());
            }
        }

        let fresh = self.fetch().await?;
        let lifetime = fresh
            .expires_in
            .unwrap_or(DEFAULT_EXPIRES_IN_SECS)
            .min(86_400);
        let value = fresh.access_token;
        *cache = Some(CachedToken {
            value: value.clone(),
            expires_at: Instant::now() + Duration::from_secs(lifetime),
        });
        Ok(value)
    }
}

fn sign_assertion(key: &ServiceAccountKey, scope: &str) -> Result<String> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| Error::authentication(format!("System clock before epoch: {}", e)))?
        .as_secs();
    let claims = Claims {
        iss: &key.client_email,
        scope,
        aud: key.token_uri(),
        iat: now,
        exp: now + ASSERTION_LIFETIME_SECS,
    };

    let mut header = Header::new(Algorithm::RS256);
    header.typ = Some("JWT".to_string());
    header.kid = key.private_key_id.clone();

    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes()).map_err(|e| {
        Error::authentication_with_context(
            format!("Invalid RSA private key in service account: {}", e),
            ErrorContext::new().with_field_path("private_key"),
        )
    })?;
    encode(&header, &claims, &encoding_key)
        .map_err(|e| Error::authentication(format!("Failed to sign JWT assertion: {}", e)))
}

async fn token_request(request: reqwest::RequestBuilder) -> Result<TokenResponse> {
    let response = request
        .send()
        .await
        .map_err(|e| Error::authentication(format!("Token request failed: {}", e)))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::authentication(format!("Failed to read token response: {}", e)))?;
    if !status.is_success() {
        return Err(Error::authentication_with_context(
            format!("Token endpoint returned {}", status),
            ErrorContext::new().with_details(body),
        ));
    }
    serde_json::from_str(&body)
        .map_err(|e| Error::authentication(format!("Malformed token response: {}", e)))
}
