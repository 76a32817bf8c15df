use super::EmailData;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum MimeType {
    Png = 0,
    Jpeg = 1,
    Gif = 2,
}

impl MimeType {
    pub const NAMES: [&'static str; 3] = ["PNG", "JPEG", "GIF"];

    pub fn as_str_name(&self) -> &'static str {
        match self {
            MimeType::Png => "PNG",
            MimeType::Jpeg => "JPEG",
            MimeType::Gif => "GIF",
        }
    }

    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "PNG" => Some(MimeType::Png),
            "JPEG" => Some(MimeType::Jpeg),
            "GIF" => Some(MimeType::Gif),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Images {
    #[prost(string, tag = "1")]
    pub placeholder: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "2")]
    pub image: ::prost::alloc::vec::Vec<u8>,
    #[prost(enumeration = "MimeType", tag = "3")]
    pub r#type: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MailContent {
    #[prost(string, tag = "1")]
    pub html: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub text: ::prost::alloc::string::String,
    #[prost(bool, tag = "3")]
    pub tracking: bool,
    #[prost(message, repeated, tag = "4")]
    pub images: ::prost::alloc::vec::Vec<Images>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AttachmentData {
    #[prost(string, tag = "1")]
    pub content_url: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub filename: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub r#type: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AdditionalInfos {
    #[prost(message, repeated, tag = "1")]
    pub attachments: ::prost::alloc::vec::Vec<AttachmentData>,
    #[prost(string, tag = "2")]
    pub category: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub send_at: ::core::option::Option<::prost_types::Timestamp>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendMailRequest {
    #[prost(message, optional, tag = "1")]
    pub from: ::core::option::Option<EmailData>,
    #[prost(message, repeated, tag = "2")]
    pub to: ::prost::alloc::vec::Vec<EmailData>,
    #[prost(message, repeated, tag = "3")]
    pub cc: ::prost::alloc::vec::Vec<EmailData>,
    #[prost(message, repeated, tag = "4")]
    pub bcc: ::prost::alloc::vec::Vec<EmailData>,
    #[prost(string, tag = "5")]
    pub subject: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "6")]
    pub text_content: ::core::option::Option<MailContent>,
    #[prost(message, optional, tag = "7")]
    pub reply_to: ::core::option::Option<EmailData>,
    #[prost(message, optional, tag = "8")]
    pub additional_infos: ::core::option::Option<AdditionalInfos>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EmlMailRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub mail: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub additional_infos: ::core::option::Option<AdditionalInfos>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GroupMailData {
    #[prost(message, optional, tag = "1")]
    pub from: ::core::option::Option<EmailData>,
    #[prost(string, tag = "2")]
    pub group_id: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub subject: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub text_content: ::core::option::Option<MailContent>,
    #[prost(string, tag = "5")]
    pub category: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendEmailResponse {
    #[prost(string, repeated, tag = "1")]
    pub message: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(int64, tag = "2")]
    pub emails_left: i64,
}
