use std::sync::Arc;

use tonic::metadata::{Ascii, MetadataValue};
use tonic::Request;
use tracing::debug;

use crate::auth::Auth;
use crate::error::{Result, SendlixError};
use crate::proto::{
    CheckEmailInGroupRequest, CheckEmailInGroupResponse, EmlMailRequest, GroupMailData,
    InsertEmailToGroupRequest, RemoveEmailFromGroupRequest, SendEmailResponse, SendMailRequest,
    UpdateResponse,
};
use crate::transport::Transport;

/// Wraps a [`Transport`] so every call carries a valid bearer token.
///
/// The token is resolved before dispatch. When that fails the call is never
/// sent and the authentication error is returned instead.
#[derive(Clone)]
pub struct AuthenticatedTransport {
    auth: Arc<Auth>,
    inner: Arc<dyn Transport>,
}

impl AuthenticatedTransport {
    pub fn new(auth: Arc<Auth>, inner: Arc<dyn Transport>) -> Self {
        Self { auth, inner }
    }

    /// Wrap `message` in a request carrying `authorization: Bearer <token>`.
    pub async fn authorize<T>(&self, message: T) -> Result<Request<T>> {
        let (key, value) = self.auth.get_auth_header().await?;
        let value = MetadataValue::<Ascii>::try_from(value).map_err(|_| {
            SendlixError::AuthenticationFailed("token is not valid call metadata".to_owned())
        })?;

        let mut request = Request::new(message);
        request.metadata_mut().insert(key, value);
        Ok(request)
    }

    pub async fn send_email(&self, message: SendMailRequest) -> Result<SendEmailResponse> {
        let request = self.authorize(message).await?;
        debug!("send_email");
        Ok(self.inner.send_email(request).await?.into_inner())
    }

    pub async fn send_eml_email(&self, message: EmlMailRequest) -> Result<SendEmailResponse> {
        let request = self.authorize(message).await?;
        debug!("send_eml_email");
        Ok(self.inner.send_eml_email(request).await?.into_inner())
    }

    pub async fn send_group_email(&self, message: GroupMailData) -> Result<SendEmailResponse> {
        let request = self.authorize(message).await?;
        debug!("send_group_email");
        Ok(self.inner.send_group_email(request).await?.into_inner())
    }

    pub async fn insert_email_to_group(
        &self,
        message: InsertEmailToGroupRequest,
    ) -> Result<UpdateResponse> {
        let request = self.authorize(message).await?;
        debug!("insert_email_to_group");
        Ok(self.inner.insert_email_to_group(request).await?.into_inner())
    }

    pub async fn remove_email_from_group(
        &self,
        message: RemoveEmailFromGroupRequest,
    ) -> Result<UpdateResponse> {
        let request = self.authorize(message).await?;
        debug!("remove_email_from_group");
        Ok(self.inner.remove_email_from_group(request).await?.into_inner())
    }

    pub async fn check_email_in_group(
        &self,
        message: CheckEmailInGroupRequest,
    ) -> Result<CheckEmailInGroupResponse> {
        let request = self.authorize(message).await?;
        debug!("check_email_in_group");
        Ok(self.inner.check_email_in_group(request).await?.into_inner())
    }
}
