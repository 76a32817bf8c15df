//! API key handling and bearer token retrieval.

pub mod credential;

use std::fmt;
use std::sync::Arc;

use tonic::Request;
use tracing::{debug, warn};

use crate::cache::token_cache::{FreshToken, TokenCache};
use crate::error::Result;
use crate::proto::{ApiKey, AuthRequest};
use crate::transport::Transport;
use crate::utils::constants::{AUTHORIZATION_HEADER, BEARER_PREFIX};

pub use credential::Credential;

/// Exchanges an API key for short-lived bearer tokens and caches them.
pub struct Auth {
    credential: Credential,
    cache: TokenCache,
    transport: Arc<dyn Transport>,
}

impl Auth {
    pub fn new(api_key: &str, transport: Arc<dyn Transport>) -> Result<Self> {
        let credential = Credential::parse(api_key)?;
        Ok(Self::from_credential(credential, transport))
    }

    pub fn from_credential(credential: Credential, transport: Arc<dyn Transport>) -> Self {
        Self {
            credential,
            cache: TokenCache::new(),
            transport,
        }
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Current bearer token, refreshed through the credential exchange when
    /// the cached one is missing or about to expire.
    pub async fn get_valid_token(&self) -> Result<String> {
        self.cache.get_or_refresh(|| self.exchange()).await
    }

    /// The `("authorization", "Bearer <token>")` metadata pair.
    pub async fn get_auth_header(&self) -> Result<(&'static str, String)> {
        let token = self.get_valid_token().await?;
        Ok((AUTHORIZATION_HEADER, format!("{BEARER_PREFIX}{token}")))
    }

    pub async fn invalidate_cache(&self) {
        self.cache.invalidate().await;
    }

    pub async fn token_expires_at(&self) -> Option<i64> {
        self.cache.expires_at().await
    }

    async fn exchange(&self) -> Result<FreshToken> {
        debug!(key_id = self.credential.key_id(), "requesting bearer token");
        let request = Request::new(AuthRequest {
            api_key: Some(ApiKey::from(&self.credential)),
        });

        let response = self
            .transport
            .get_jwt_token(request)
            .await
            .inspect_err(|status| warn!(code = ?status.code(), "token exchange failed"))?
            .into_inner();

        let ttl_seconds = response.expires.as_ref().map(|e| e.seconds).unwrap_or(0);
        Ok(FreshToken {
            value: response.token,
            ttl_seconds,
        })
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth")
            .field("credential", &self.credential)
            .finish_non_exhaustive()
    }
}
