//! Wire messages exchanged with the Sendlix API.
//!
//! These mirror the service's protobuf contract field for field. They are
//! declared by hand with `prost` derives so the crate builds without
//! `protoc`; tags must stay in sync with the service definitions.

pub mod auth;
pub mod email;
pub mod group;

/// A single recipient as the service expects it.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EmailData {
    #[prost(string, tag = "1")]
    pub email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
}

pub use auth::{ApiKey, AuthRequest, AuthResponse};
pub use email::{
    AdditionalInfos, AttachmentData, EmlMailRequest, GroupMailData, Images, MailContent, MimeType,
    SendEmailResponse, SendMailRequest,
};
pub use group::{
    CheckEmailInGroupRequest, CheckEmailInGroupResponse, FailureHandler, GroupEntry,
    InsertEmailToGroupRequest, RemoveEmailFromGroupRequest, UpdateResponse,
};
