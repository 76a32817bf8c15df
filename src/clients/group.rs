use std::sync::Arc;

use tracing::info;

use crate::auth::Auth;
use crate::builders::group::{
    build_check_request, build_insert_request, build_remove_request, GroupEntries,
};
use crate::builders::response::unwrap_update;
use crate::error::Result;
use crate::transport::{AuthenticatedTransport, Transport};

/// Manages recipient group membership.
#[derive(Clone)]
pub struct GroupClient {
    transport: AuthenticatedTransport,
}

impl GroupClient {
    pub fn new(auth: Arc<Auth>, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport: AuthenticatedTransport::new(auth, transport),
        }
    }

    pub fn from_authenticated(transport: AuthenticatedTransport) -> Self {
        Self { transport }
    }

    /// Add one or more entries to `group_id`.
    ///
    /// `failure_policy` names a [`FailureHandler`](crate::proto::FailureHandler)
    /// and defaults to `ABORT`.
    pub async fn insert_into_group(
        &self,
        group_id: &str,
        entries: impl Into<GroupEntries>,
        failure_policy: Option<&str>,
    ) -> Result<()> {
        let request = build_insert_request(group_id, &entries.into(), failure_policy)?;
        let inserted = request.entries.len();
        let response = self.transport.insert_email_to_group(request).await?;
        unwrap_update(response, "InsertEmailToGroup failed")?;
        info!(group_id, inserted, "group entries inserted");
        Ok(())
    }

    pub async fn remove_from_group(&self, group_id: &str, email: &str) -> Result<()> {
        let request = build_remove_request(group_id, email)?;
        let response = self.transport.remove_email_from_group(request).await?;
        unwrap_update(response, "RemoveEmailFromGroup failed")?;
        info!(group_id, "group entry removed");
        Ok(())
    }

    pub async fn contains_in_group(&self, group_id: &str, email: &str) -> Result<bool> {
        let request = build_check_request(group_id, email)?;
        Ok(self.transport.check_email_in_group(request).await?.exists)
    }
}
