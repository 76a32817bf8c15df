use std::sync::Arc;

use tracing::info;

use crate::auth::Auth;
use crate::builders::group_mail::{build_group_mail_request, GroupMailOptions};
use crate::builders::mail::{build_send_mail_request, AdditionalOptions, MailOptions};
use crate::builders::raw::{build_eml_request, EmlSource};
use crate::builders::response::SendOutcome;
use crate::error::Result;
use crate::transport::{AuthenticatedTransport, Transport};

/// Sends single, raw and group mail.
#[derive(Clone)]
pub struct EmailClient {
    transport: AuthenticatedTransport,
}

impl EmailClient {
    pub fn new(auth: Arc<Auth>, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport: AuthenticatedTransport::new(auth, transport),
        }
    }

    pub fn from_authenticated(transport: AuthenticatedTransport) -> Self {
        Self { transport }
    }

    pub async fn send_email(
        &self,
        options: &MailOptions,
        additional: Option<&AdditionalOptions>,
    ) -> Result<SendOutcome> {
        let request = build_send_mail_request(options, additional)?;
        let outcome = SendOutcome::from(self.transport.send_email(request).await?);
        info!(messages = outcome.messages.len(), emails_left = outcome.emails_left, "email sent");
        Ok(outcome)
    }

    /// Send a pre-built MIME message from memory or from a file.
    pub async fn send_raw_email(
        &self,
        source: impl Into<EmlSource>,
        additional: Option<&AdditionalOptions>,
    ) -> Result<SendOutcome> {
        let mail = source.into().load().await?;
        let request = build_eml_request(mail, additional)?;
        let outcome = SendOutcome::from(self.transport.send_eml_email(request).await?);
        info!(messages = outcome.messages.len(), "raw email sent");
        Ok(outcome)
    }

    pub async fn send_group_email(&self, options: &GroupMailOptions) -> Result<SendOutcome> {
        let request = build_group_mail_request(options)?;
        let group_id = request.group_id.clone();
        let outcome = SendOutcome::from(self.transport.send_group_email(request).await?);
        info!(%group_id, messages = outcome.messages.len(), "group email sent");
        Ok(outcome)
    }
}
