use std::future::Future;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::cache::token::CachedToken;
use crate::error::{Result, SendlixError};
use crate::helpers::time::now_i64;
use crate::utils::constants::TOKEN_SKEW_SECONDS;

/// Token as handed back by a credential exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreshToken {
    pub value: String,
    pub ttl_seconds: i64,
}

/// One-slot bearer token cache owned by a single client.
///
/// The check-then-refresh sequence runs under one lock, so concurrent
/// callers sharing a client trigger at most one exchange per expiry.
#[derive(Debug)]
pub struct TokenCache {
    slot: Mutex<Option<CachedToken>>,
    skew_seconds: i64,
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenCache {
    pub fn new() -> Self {
        Self::with_skew(TOKEN_SKEW_SECONDS)
    }

    pub fn with_skew(skew_seconds: i64) -> Self {
        Self {
            slot: Mutex::new(None),
            skew_seconds,
        }
    }

    /// Return the cached token if still fresh, otherwise run `fetch` and
    /// store its result. An empty token value is rejected and not cached.
    pub async fn get_or_refresh<F, Fut>(&self, fetch: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<FreshToken>>,
    {
        let mut slot = self.slot.lock().await;
        let now = now_i64();

        if let Some(token) = slot.as_ref().filter(|t| t.is_fresh(now, self.skew_seconds)) {
            debug!(expires_at = token.expires_at, "token cache hit");
            return Ok(token.value.clone());
        }

        let fresh = fetch().await?;
        if fresh.value.is_empty() {
            return Err(SendlixError::AuthenticationFailed(
                "empty token in response from server".to_owned(),
            ));
        }

        let expires_at = now.saturating_add(fresh.ttl_seconds);
        info!(expires_at, ttl_seconds = fresh.ttl_seconds, "token refreshed");
        *slot = Some(CachedToken::new(fresh.value.clone(), expires_at));
        Ok(fresh.value)
    }

    /// Drop the cached token; the next lookup refreshes.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.lock().await;
        if slot.take().is_some() {
            debug!("token cache invalidated");
        }
    }

    pub async fn expires_at(&self) -> Option<i64> {
        self.slot.lock().await.as_ref().map(|t| t.expires_at)
    }
}
