//! The remote procedure seam.
//!
//! [`Transport`] is one method per Sendlix RPC. [`GrpcTransport`] talks to
//! the real service; tests plug in a recording double. Calls that need a
//! bearer token go through [`AuthenticatedTransport`].

pub mod authenticated;
pub mod grpc;

use async_trait::async_trait;
use tonic::{Request, Response, Status};

use crate::proto::{
    AuthRequest, AuthResponse, CheckEmailInGroupRequest, CheckEmailInGroupResponse,
    EmlMailRequest, GroupMailData, InsertEmailToGroupRequest, RemoveEmailFromGroupRequest,
    SendEmailResponse, SendMailRequest, UpdateResponse,
};

pub use authenticated::AuthenticatedTransport;
pub use grpc::GrpcTransport;

#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_jwt_token(
        &self,
        request: Request<AuthRequest>,
    ) -> Result<Response<AuthResponse>, Status>;

    async fn send_email(
        &self,
        request: Request<SendMailRequest>,
    ) -> Result<Response<SendEmailResponse>, Status>;

    async fn send_eml_email(
        &self,
        request: Request<EmlMailRequest>,
    ) -> Result<Response<SendEmailResponse>, Status>;

    async fn send_group_email(
        &self,
        request: Request<GroupMailData>,
    ) -> Result<Response<SendEmailResponse>, Status>;

    async fn insert_email_to_group(
        &self,
        request: Request<InsertEmailToGroupRequest>,
    ) -> Result<Response<UpdateResponse>, Status>;

    async fn remove_email_from_group(
        &self,
        request: Request<RemoveEmailFromGroupRequest>,
    ) -> Result<Response<UpdateResponse>, Status>;

    async fn check_email_in_group(
        &self,
        request: Request<CheckEmailInGroupRequest>,
    ) -> Result<Response<CheckEmailInGroupResponse>, Status>;

    /// Release the underlying connection. Must tolerate repeated calls.
    async fn close(&self) {}
}
