use std::time::Duration;

use async_trait::async_trait;
use http::uri::PathAndQuery;
use tokio::sync::RwLock;
use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};
use tonic::{Request, Response, Status};
use tracing::{debug, info};

use crate::config::settings::ClientConfig;
use crate::error::{Result, SendlixError};
use crate::proto::{
    AuthRequest, AuthResponse, CheckEmailInGroupRequest, CheckEmailInGroupResponse,
    EmlMailRequest, GroupMailData, InsertEmailToGroupRequest, RemoveEmailFromGroupRequest,
    SendEmailResponse, SendMailRequest, UpdateResponse,
};
use crate::transport::Transport;
use crate::utils::constants::*;

/// [`Transport`] over a lazily connected tonic channel.
#[derive(Debug)]
pub struct GrpcTransport {
    host: String,
    channel: RwLock<Option<Channel>>,
}

impl GrpcTransport {
    /// Build the channel without connecting; the first call dials the host.
    ///
    /// Must run inside a Tokio runtime. TLS with the platform's root store
    /// is used for `https://` hosts.
    pub fn connect_lazy(config: &ClientConfig) -> Result<Self> {
        let mut endpoint = Endpoint::from_shared(config.host.clone())
            .map_err(|_| SendlixError::InvalidHost(config.host.clone()))?
            .user_agent(config.user_agent.clone())?;

        if config.host.starts_with("https://") {
            endpoint = endpoint.tls_config(ClientTlsConfig::new().with_native_roots())?;
        }
        if let Some(ms) = config.connect_timeout_ms {
            endpoint = endpoint.connect_timeout(Duration::from_millis(ms));
        }
        if let Some(ms) = config.timeout_ms {
            endpoint = endpoint.timeout(Duration::from_millis(ms));
        }

        debug!(host = %config.host, "grpc channel prepared");
        Ok(Self {
            host: config.host.clone(),
            channel: RwLock::new(Some(endpoint.connect_lazy())),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    async fn channel(&self) -> std::result::Result<Channel, Status> {
        self.channel
            .read()
            .await
            .clone()
            .ok_or_else(|| Status::unavailable("channel is closed"))
    }

    async fn unary<Req, Resp>(
        &self,
        request: Request<Req>,
        path: &'static str,
    ) -> std::result::Result<Response<Resp>, Status>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        let mut grpc = Grpc::new(self.channel().await?);
        grpc.ready()
            .await
            .map_err(|e| Status::unknown(format!("service was not ready: {e}")))?;
        debug!(path, "dispatching call");
        let codec: ProstCodec<Req, Resp> = ProstCodec::default();
        grpc.unary(request, PathAndQuery::from_static(path), codec)
            .await
    }
}

#[async_trait]
impl Transport for GrpcTransport {
    async fn get_jwt_token(
        &self,
        request: Request<AuthRequest>,
    ) -> std::result::Result<Response<AuthResponse>, Status> {
        self.unary(request, PATH_GET_JWT_TOKEN).await
    }

    async fn send_email(
        &self,
        request: Request<SendMailRequest>,
    ) -> std::result::Result<Response<SendEmailResponse>, Status> {
        self.unary(request, PATH_SEND_EMAIL).await
    }

    async fn send_eml_email(
        &self,
        request: Request<EmlMailRequest>,
    ) -> std::result::Result<Response<SendEmailResponse>, Status> {
        self.unary(request, PATH_SEND_EML_EMAIL).await
    }

    async fn send_group_email(
        &self,
        request: Request<GroupMailData>,
    ) -> std::result::Result<Response<SendEmailResponse>, Status> {
        self.unary(request, PATH_SEND_GROUP_EMAIL).await
    }

    async fn insert_email_to_group(
        &self,
        request: Request<InsertEmailToGroupRequest>,
    ) -> std::result::Result<Response<UpdateResponse>, Status> {
        self.unary(request, PATH_INSERT_EMAIL_TO_GROUP).await
    }

    async fn remove_email_from_group(
        &self,
        request: Request<RemoveEmailFromGroupRequest>,
    ) -> std::result::Result<Response<UpdateResponse>, Status> {
        self.unary(request, PATH_REMOVE_EMAIL_FROM_GROUP).await
    }

    async fn check_email_in_group(
        &self,
        request: Request<CheckEmailInGroupRequest>,
    ) -> std::result::Result<Response<CheckEmailInGroupResponse>, Status> {
        self.unary(request, PATH_CHECK_EMAIL_IN_GROUP).await
    }

    async fn close(&self) {
        if self.channel.write().await.take().is_some() {
            info!(host = %self.host, "grpc channel closed");
        }
    }
}
