//! Recipient normalisation.
//!
//! Callers may name a recipient as a bare address or as a record with an
//! optional display name. Both collapse into [`Address`] here, and nothing
//! downstream deals with the loose form.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use crate::error::{Result, SendlixError};
use crate::proto::EmailData;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// A recipient as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AddressInput {
    Plain(String),
    Record {
        #[serde(default)]
        email: Option<String>,
        #[serde(default)]
        name: Option<String>,
    },
}

impl AddressInput {
    pub fn named(email: impl Into<String>, name: impl Into<String>) -> Self {
        AddressInput::Record {
            email: Some(email.into()),
            name: Some(name.into()),
        }
    }

    /// Resolve into a validated [`Address`].
    pub fn normalize(&self) -> Result<Address> {
        normalize(self)
    }
}

impl From<&str> for AddressInput {
    fn from(value: &str) -> Self {
        AddressInput::Plain(value.to_owned())
    }
}

impl From<String> for AddressInput {
    fn from(value: String) -> Self {
        AddressInput::Plain(value)
    }
}

impl From<Address> for AddressInput {
    fn from(address: Address) -> Self {
        AddressInput::Record {
            email: Some(address.email),
            name: address.display_name,
        }
    }
}

/// A validated recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub email: String,
    pub display_name: Option<String>,
}

pub fn normalize(input: &AddressInput) -> Result<Address> {
    let (email, name) = match input {
        AddressInput::Plain(email) => (email.as_str(), None),
        AddressInput::Record { email, name } => {
            let email = email
                .as_deref()
                .filter(|e| !e.is_empty())
                .ok_or_else(|| SendlixError::missing(["email"]))?;
            (email, name.as_deref())
        }
    };

    validate_email(email)?;
    Ok(Address {
        email: email.to_owned(),
        display_name: name.filter(|n| !n.is_empty()).map(str::to_owned),
    })
}

pub fn validate_email(email: &str) -> Result<()> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(SendlixError::InvalidAddress(email.to_owned()))
    }
}

impl From<Address> for EmailData {
    fn from(address: Address) -> Self {
        EmailData {
            email: address.email,
            name: address.display_name.unwrap_or_default(),
        }
    }
}

/// Normalise straight into the wire shape.
pub(crate) fn to_email_data(input: &AddressInput) -> Result<EmailData> {
    normalize(input).map(EmailData::from)
}
