//! Turn caller options into wire requests.
//!
//! Builders are pure: they validate everything up front and return a fresh
//! request, so invalid input never reaches the network.

pub mod content;
pub mod group;
pub mod group_mail;
pub mod mail;
pub mod raw;
pub mod response;

use crate::address::AddressInput;
use crate::error::{Result, SendlixError};

pub use content::{ImageOptions, MailContent};
pub use group::{GroupEntries, GroupEntryInput};
pub use group_mail::GroupMailOptions;
pub use mail::{AdditionalOptions, AttachmentOptions, MailOptions, SendAt};
pub use raw::EmlSource;
pub use response::SendOutcome;

/// Fail with every field whose check did not hold, in declaration order.
pub(crate) fn require(checks: &[(&'static str, bool)]) -> Result<()> {
    let missing: Vec<&str> = checks
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(SendlixError::missing(missing))
    }
}

pub(crate) fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// An address counts as given only when it carries a non-empty email.
pub(crate) fn address_present(value: &Option<AddressInput>) -> bool {
    match value {
        Some(AddressInput::Plain(email)) => !email.is_empty(),
        Some(AddressInput::Record { email, .. }) => is_present(email),
        None => false,
    }
}
