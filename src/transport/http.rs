use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::auth::TokenProvider;
use crate::{Error, Result};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Authenticated JSON-over-HTTPS transport for the vendor REST API.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

/// Google's JSON error envelope: `{"error": {"code": .., "message": .., "status": ..}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

impl HttpTransport {
    pub fn new(
        base_url: &str,
        tokens: Arc<dyn TokenProvider>,
        default_timeout: Duration,
    ) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| Error::configuration(format!("Invalid base URL {}: {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::configuration(format!(
                "Unsupported base URL scheme: {}",
                parsed.scheme()
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(default_timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let request = self.client.get(&url);
        self.send(path, request, None).await
    }

    /// POST a JSON body. `timeout` overrides the client default for this call only.
    pub async fn post_json<B, T>(&self, path: &str, body: &B, timeout: Option<Duration>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.post(&url).json(body);
        if let Some(t) = timeout {
            request = request.timeout(t);
        }
        self.send(path, request, timeout).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        request: reqwest::RequestBuilder,
        timeout: Option<Duration>,
    ) -> Result<T> {
        let token = self.tokens.access_token().await?;
        debug!(path, "sending vendor request");

        let response = request
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| map_reqwest_error(path, e, timeout))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| map_reqwest_error(path, e, timeout))?;

        if !status.is_success() {
            return Err(Error::Remote {
                status: status.as_u16(),
                message: error_message(&bytes),
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn map_reqwest_error(path: &str, e: reqwest::Error, timeout: Option<Duration>) -> Error {
    match timeout {
        Some(after) if e.is_timeout() => Error::timeout(path.trim_start_matches('/'), after),
        _ => Error::Transport(TransportError::Http(e)),
    }
}

fn error_message(body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(env) => match env.error.status {
            Some(status) => format!("{} ({})", env.error.message, status),
            None => env.error.message,
        },
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
