use tracing::warn;

use crate::error::{Result, SendlixError};
use crate::proto::{SendEmailResponse, UpdateResponse};

/// What the service reports after accepting mail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendOutcome {
    pub messages: Vec<String>,
    pub emails_left: i64,
}

impl From<SendEmailResponse> for SendOutcome {
    fn from(response: SendEmailResponse) -> Self {
        Self {
            messages: response.message,
            emails_left: response.emails_left,
        }
    }
}

/// An explicit `success = false` becomes [`SendlixError::OperationFailed`].
/// A response without the flag is taken as is.
pub fn unwrap_update(response: UpdateResponse, default_message: &str) -> Result<()> {
    match response.success {
        Some(false) => {
            let message = if response.message.is_empty() {
                default_message.to_owned()
            } else {
                response.message
            };
            warn!(%message, "service reported failure");
            Err(SendlixError::OperationFailed(message))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_flag_carries_service_message() {
        let response = UpdateResponse {
            success: Some(false),
            message: "x".into(),
        };
        let err = unwrap_update(response, "fallback").unwrap_err();
        assert!(matches!(err, SendlixError::OperationFailed(ref m) if m == "x"));
    }

    #[test]
    fn failure_without_message_uses_default() {
        let response = UpdateResponse {
            success: Some(false),
            message: String::new(),
        };
        let err = unwrap_update(response, "InsertEmailToGroup failed").unwrap_err();
        assert_eq!(err.to_string(), "InsertEmailToGroup failed");
    }

    #[test]
    fn success_and_missing_flag_pass() {
        assert!(unwrap_update(UpdateResponse { success: Some(true), message: String::new() }, "d").is_ok());
        assert!(unwrap_update(UpdateResponse::default(), "d").is_ok());
    }
}
