//! Shared constants and invariants

pub const DEFAULT_API_HOST: &str = "https://api.sendlix.com";
pub const USER_AGENT: &str = concat!("sendlix-rust/", env!("CARGO_PKG_VERSION"));

/// Seconds shaved off a token's expiry before it is considered stale.
pub const TOKEN_SKEW_SECONDS: i64 = 5;

pub const AUTHORIZATION_HEADER: &str = "authorization";
pub const BEARER_PREFIX: &str = "Bearer ";

pub const DEFAULT_FAILURE_POLICY: &str = "ABORT";

pub const ENV_API_KEY: &str = "SENDLIX_API_KEY";
pub const ENV_HOST: &str = "SENDLIX_HOST";
pub const ENV_LOG_LEVEL: &str = "SENDLIX_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "SENDLIX_LOG_FORMAT";

// gRPC method paths
pub const PATH_GET_JWT_TOKEN: &str = "/sendlix.api.v1.Auth/GetJwtToken";
pub const PATH_SEND_EMAIL: &str = "/sendlix.api.v1.Email/SendEmail";
pub const PATH_SEND_EML_EMAIL: &str = "/sendlix.api.v1.Email/SendEmlEmail";
pub const PATH_SEND_GROUP_EMAIL: &str = "/sendlix.api.v1.Email/SendGroupEmail";
pub const PATH_INSERT_EMAIL_TO_GROUP: &str = "/sendlix.api.v1.Group/InsertEmailToGroup";
pub const PATH_REMOVE_EMAIL_FROM_GROUP: &str = "/sendlix.api.v1.Group/RemoveEmailFromGroup";
pub const PATH_CHECK_EMAIL_IN_GROUP: &str = "/sendlix.api.v1.Group/CheckEmailInGroup";
