use serde::Deserialize;

use crate::address::{to_email_data, AddressInput};
use crate::builders::content::{build_mail_content, ensure_body, MailContent};
use crate::builders::{address_present, is_present, require};
use crate::error::Result;
use crate::proto::GroupMailData;

/// Options for a mail sent to every member of a group.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupMailOptions {
    pub from: Option<AddressInput>,
    pub group_id: Option<String>,
    pub subject: Option<String>,
    pub category: Option<String>,
    #[serde(flatten)]
    pub content: MailContent,
}

pub fn build_group_mail_request(options: &GroupMailOptions) -> Result<GroupMailData> {
    require(&[
        ("from", address_present(&options.from)),
        ("groupId", is_present(&options.group_id)),
        ("subject", is_present(&options.subject)),
    ])?;
    ensure_body(&options.content)?;

    Ok(GroupMailData {
        from: options.from.as_ref().map(to_email_data).transpose()?,
        group_id: options.group_id.clone().unwrap_or_default(),
        subject: options.subject.clone().unwrap_or_default(),
        text_content: Some(build_mail_content(&options.content)?),
        category: options.category.clone().unwrap_or_default(),
    })
}
