//! 认证：凭据文件解析与 OAuth2 访问令牌获取。
//!
//! Credentials and OAuth2 access tokens for the vendor API.

mod credentials;
mod google;

pub use credentials::{
    find_ambient_credentials, well_known_file, AuthorizedUser, CredentialSource,
    CredentialsFile, ServiceAccountKey, CREDENTIALS_ENV, DEFAULT_TOKEN_URI,
};
pub use google::{GoogleTokenProvider, CLOUD_PLATFORM_SCOPE};

use async_trait::async_trait;

use crate::Result;

/// Source of bearer tokens for outgoing vendor requests.
#[async_trait]
pub trait TokenProvider: Send + Sync + std::fmt::Debug {
    async fn access_token(&self) -> Result<String>;
}

/// A fixed token, for hosts that mint their own tokens (and for tests).
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}
