//! Public entry points.

pub mod email;
pub mod group;

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::info;

use crate::auth::Auth;
use crate::config::settings::ClientConfig;
use crate::error::Result;
use crate::transport::{AuthenticatedTransport, GrpcTransport, Transport};

pub use email::EmailClient;
pub use group::GroupClient;

/// A Sendlix client: one credential, one token cache, one connection.
///
/// The email and group facades share the cache, so a token fetched for one
/// is reused by the other.
pub struct Client {
    auth: Arc<Auth>,
    transport: Arc<dyn Transport>,
    email: EmailClient,
    group: GroupClient,
    closed: AtomicBool,
}

impl Client {
    /// Connect to the default host. Must run inside a Tokio runtime.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::connect(&ClientConfig::new(api_key))
    }

    /// Connect with explicit settings. Must run inside a Tokio runtime.
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        let transport = GrpcTransport::connect_lazy(config)?;
        Self::with_transport(&config.api_key, Arc::new(transport))
    }

    /// Build on any [`Transport`]. The API key is validated here.
    pub fn with_transport(api_key: &str, transport: Arc<dyn Transport>) -> Result<Self> {
        let auth = Arc::new(Auth::new(api_key, Arc::clone(&transport))?);
        let authenticated = AuthenticatedTransport::new(Arc::clone(&auth), Arc::clone(&transport));

        Ok(Self {
            email: EmailClient::from_authenticated(authenticated.clone()),
            group: GroupClient::from_authenticated(authenticated),
            auth,
            transport,
            closed: AtomicBool::new(false),
        })
    }

    pub fn email(&self) -> &EmailClient {
        &self.email
    }

    pub fn group(&self) -> &GroupClient {
        &self.group
    }

    pub fn auth(&self) -> Arc<Auth> {
        Arc::clone(&self.auth)
    }

    pub async fn get_auth_header(&self) -> Result<(&'static str, String)> {
        self.auth.get_auth_header().await
    }

    pub async fn invalidate_token_cache(&self) {
        self.auth.invalidate_cache().await;
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Release the connection and forget the cached token. Closing twice
    /// does nothing.
    pub async fn close(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        self.transport.close().await;
        self.auth.invalidate_cache().await;
        info!(key_id = self.auth.credential().key_id(), "client closed");
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("auth", &self.auth)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}
