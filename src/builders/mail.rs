use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::address::{to_email_data, AddressInput};
use crate::builders::content::{build_mail_content, ensure_body, MailContent};
use crate::builders::{address_present, is_present, require};
use crate::error::Result;
use crate::helpers::time::to_timestamp;
use crate::proto::{AdditionalInfos, AttachmentData, SendMailRequest};

/// Options for a single email.
///
/// `from`, a non-empty `to` and `subject` are required; see [`MailContent`]
/// for the body rule.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MailOptions {
    pub from: Option<AddressInput>,
    pub to: Vec<AddressInput>,
    pub cc: Vec<AddressInput>,
    pub bcc: Vec<AddressInput>,
    pub subject: Option<String>,
    pub reply_to: Option<AddressInput>,
    #[serde(flatten)]
    pub content: MailContent,
}

/// A file the service fetches from `content_url` and attaches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AttachmentOptions {
    #[serde(rename = "contentURL")]
    pub content_url: Option<String>,
    pub filename: Option<String>,
    #[serde(rename = "contentType")]
    pub content_type: Option<String>,
}

impl AttachmentOptions {
    pub fn new(content_url: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            content_url: Some(content_url.into()),
            filename: Some(filename.into()),
            content_type: None,
        }
    }
}

/// Scheduled delivery time.
///
/// Times without an offset are taken as UTC, never as local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SendAt {
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl SendAt {
    pub fn to_utc(&self) -> DateTime<Utc> {
        match self {
            SendAt::Zoned(at) => at.with_timezone(&Utc),
            SendAt::Naive(at) => at.and_utc(),
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for SendAt {
    fn from(at: DateTime<Tz>) -> Self {
        SendAt::Zoned(at.fixed_offset())
    }
}

impl From<NaiveDateTime> for SendAt {
    fn from(at: NaiveDateTime) -> Self {
        SendAt::Naive(at)
    }
}

/// Extras shared by single and raw mail.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdditionalOptions {
    pub attachments: Vec<AttachmentOptions>,
    pub category: Option<String>,
    #[serde(alias = "send_at")]
    pub send_at: Option<SendAt>,
}

pub fn build_additional_infos(options: &AdditionalOptions) -> Result<AdditionalInfos> {
    let attachments = options
        .attachments
        .iter()
        .map(|attachment| {
            require(&[
                ("contentURL", is_present(&attachment.content_url)),
                ("filename", is_present(&attachment.filename)),
            ])?;
            Ok(AttachmentData {
                content_url: attachment.content_url.clone().unwrap_or_default(),
                filename: attachment.filename.clone().unwrap_or_default(),
                r#type: attachment.content_type.clone().unwrap_or_default(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(AdditionalInfos {
        attachments,
        category: options.category.clone().unwrap_or_default(),
        send_at: options.send_at.map(|at| to_timestamp(at.to_utc())),
    })
}

pub fn build_send_mail_request(
    options: &MailOptions,
    additional: Option<&AdditionalOptions>,
) -> Result<SendMailRequest> {
    require(&[
        ("from", address_present(&options.from)),
        ("to", !options.to.is_empty()),
        ("subject", is_present(&options.subject)),
    ])?;
    ensure_body(&options.content)?;

    let from = options.from.as_ref().map(to_email_data).transpose()?;
    let to = options.to.iter().map(to_email_data).collect::<Result<Vec<_>>>()?;
    let cc = options.cc.iter().map(to_email_data).collect::<Result<Vec<_>>>()?;
    let bcc = options.bcc.iter().map(to_email_data).collect::<Result<Vec<_>>>()?;
    let reply_to = options.reply_to.as_ref().map(to_email_data).transpose()?;
    let additional_infos = additional.map(build_additional_infos).transpose()?;

    debug!(
        to = to.len(),
        cc = cc.len(),
        bcc = bcc.len(),
        images = options.content.images.len(),
        "built send mail request"
    );

    Ok(SendMailRequest {
        from,
        to,
        cc,
        bcc,
        subject: options.subject.clone().unwrap_or_default(),
        text_content: Some(build_mail_content(&options.content)?),
        reply_to,
        additional_infos,
    })
}
