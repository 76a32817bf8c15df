use std::fmt;

#[derive(Clone, PartialEq, ::prost::Message)]
#[prost(skip_debug)]
pub struct ApiKey {
    #[prost(string, tag = "1")]
    pub secret: ::prost::alloc::string::String,
    #[prost(int64, tag = "2")]
    pub key_id: i64,
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("secret", &"<redacted>")
            .field("key_id", &self.key_id)
            .finish()
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuthRequest {
    #[prost(message, optional, tag = "1")]
    pub api_key: ::core::option::Option<ApiKey>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
#[prost(skip_debug)]
pub struct AuthResponse {
    #[prost(string, tag = "1")]
    pub token: ::prost::alloc::string::String,
    /// Remaining lifetime of `token`; absent means "do not cache".
    #[prost(message, optional, tag = "2")]
    pub expires: ::core::option::Option<::prost_types::Timestamp>,
}

impl fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResponse")
            .field("token", &"<redacted>")
            .field("expires", &self.expires)
            .finish()
    }
}
