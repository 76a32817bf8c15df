//! # Sendlix client library
//!
//! Authenticated access to the Sendlix transactional email API over gRPC:
//! single mail, raw MIME mail, templated group mail and group membership.
//!
//! Modules:
//! - `auth`: API key parsing and bearer token exchange
//! - `cache`: one-slot token cache with expiry skew
//! - `address`: recipient normalisation and validation
//! - `builders`: option structs and wire request construction
//! - `transport`: RPC seam, tonic implementation, bearer injection
//! - `clients`: `Client`, `EmailClient`, `GroupClient`
//! - `config`: client settings and YAML/env loading
//!
//! ```no_run
//! use sendlix::{Client, MailContent, MailOptions};
//!
//! # async fn demo() -> sendlix::Result<()> {
//! let client = Client::new("secret.42")?;
//! let options = MailOptions {
//!     from: Some("sender@example.com".into()),
//!     to: vec!["someone@example.com".into()],
//!     subject: Some("Hello".into()),
//!     content: MailContent::text("Hi there"),
//!     ..Default::default()
//! };
//! client.email().send_email(&options, None).await?;
//! client.close().await;
//! # Ok(())
//! # }
//! ```

pub mod address;
pub mod auth;
pub mod builders;
pub mod cache;
pub mod clients;
pub mod config;
pub mod error;
pub mod helpers;
pub mod proto;
pub mod transport;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::address::{Address, AddressInput};
pub use crate::auth::{Auth, Credential};
pub use crate::builders::{
    AdditionalOptions, AttachmentOptions, EmlSource, GroupEntries, GroupEntryInput,
    GroupMailOptions, ImageOptions, MailContent, MailOptions, SendAt, SendOutcome,
};
pub use crate::clients::{Client, EmailClient, GroupClient};
pub use crate::config::settings::ClientConfig;
pub use crate::error::{Result, SendlixError};
pub use crate::transport::Transport;
