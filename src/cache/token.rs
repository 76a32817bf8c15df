use std::fmt;

/// The single bearer token held by a [`TokenCache`](super::token_cache::TokenCache).
#[derive(Clone)]
pub struct CachedToken {
    pub value: String,
    pub expires_at: i64, // UNIX timestamp
}

impl CachedToken {
    pub fn new(value: String, expires_at: i64) -> Self {
        Self { value, expires_at }
    }

    /// Usable only while `expires_at - skew` is still in the future.
    pub fn is_fresh(&self, now: i64, skew_seconds: i64) -> bool {
        self.expires_at.saturating_sub(skew_seconds) > now
    }
}

impl fmt::Debug for CachedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedToken")
            .field("value", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
