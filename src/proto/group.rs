use super::EmailData;

/// What the service does when one entry of a bulk insert is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum FailureHandler {
    Abort = 0,
    Continue = 1,
}

impl FailureHandler {
    pub const NAMES: [&'static str; 2] = ["ABORT", "CONTINUE"];

    pub fn as_str_name(&self) -> &'static str {
        match self {
            FailureHandler::Abort => "ABORT",
            FailureHandler::Continue => "CONTINUE",
        }
    }

    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "ABORT" => Some(FailureHandler::Abort),
            "CONTINUE" => Some(FailureHandler::Continue),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GroupEntry {
    #[prost(message, optional, tag = "1")]
    pub email: ::core::option::Option<EmailData>,
    #[prost(map = "string, string", tag = "2")]
    pub substitutions:
        ::std::collections::HashMap<::prost::alloc::string::String, ::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InsertEmailToGroupRequest {
    #[prost(string, tag = "1")]
    pub group_id: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub entries: ::prost::alloc::vec::Vec<GroupEntry>,
    #[prost(enumeration = "FailureHandler", tag = "3")]
    pub on_failure: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoveEmailFromGroupRequest {
    #[prost(string, tag = "1")]
    pub group_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub email: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CheckEmailInGroupRequest {
    #[prost(string, tag = "1")]
    pub group_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub email: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateResponse {
    #[prost(bool, optional, tag = "1")]
    pub success: ::core::option::Option<bool>,
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CheckEmailInGroupResponse {
    #[prost(bool, tag = "1")]
    pub exists: bool,
}
