use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SendlixError};
use crate::proto::ApiKey;

/// An API key split into its secret and numeric key id.
///
/// Keys have the form `<secret>.<keyId>`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    secret: String,
    key_id: i64,
}

impl Credential {
    pub fn parse(api_key: &str) -> Result<Self> {
        let mut parts = api_key.split('.');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(secret), Some(key_id), None) if !secret.is_empty() && !key_id.is_empty() => {
                let key_id = key_id
                    .parse::<i64>()
                    .map_err(|_| SendlixError::InvalidCredentialFormat)?;
                Ok(Self {
                    secret: secret.to_owned(),
                    key_id,
                })
            }
            _ => Err(SendlixError::InvalidCredentialFormat),
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn key_id(&self) -> i64 {
        self.key_id
    }
}

impl FromStr for Credential {
    type Err = SendlixError;

    fn from_str(s: &str) -> Result<Self> {
        Credential::parse(s)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("secret", &"<redacted>")
            .field("key_id", &self.key_id)
            .finish()
    }
}

impl From<&Credential> for ApiKey {
    fn from(credential: &Credential) -> Self {
        ApiKey {
            secret: credential.secret.clone(),
            key_id: credential.key_id,
        }
    }
}
