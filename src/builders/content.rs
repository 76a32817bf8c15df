use serde::{Deserialize, Deserializer};

use crate::builders::{is_present, require};
use crate::error::{Result, SendlixError};
use crate::proto::{self, Images, MimeType};

/// Body of a message plus the images it references.
///
/// At least one of `html` and `text` must be non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MailContent {
    pub html: Option<String>,
    pub text: Option<String>,
    /// Ask the service to track opens and clicks.
    pub tracking: bool,
    pub images: Vec<ImageOptions>,
}

impl MailContent {
    pub fn html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Default::default()
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn has_body(&self) -> bool {
        is_present(&self.html) || is_present(&self.text)
    }
}

/// An inline image, referenced from the body through `placeholder`.
///
/// In serialized form `data` is base64 and `type` is the MIME type name
/// (`PNG`, `JPEG`, `GIF`, any case).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImageOptions {
    pub placeholder: Option<String>,
    #[serde(deserialize_with = "base64_data::deserialize")]
    pub data: Option<Vec<u8>>,
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
}

impl ImageOptions {
    pub fn new(placeholder: impl Into<String>, data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            placeholder: Some(placeholder.into()),
            data: Some(data),
            mime_type: Some(mime_type.into()),
        }
    }
}

pub fn ensure_body(content: &MailContent) -> Result<()> {
    if content.has_body() {
        Ok(())
    } else {
        Err(SendlixError::EmptyContent(
            "either 'html' or 'text' content must be provided",
        ))
    }
}

pub fn resolve_mime_type(value: &str) -> Result<MimeType> {
    let upper = value.to_uppercase();
    MimeType::from_str_name(&upper).ok_or(SendlixError::UnsupportedMimeType(upper))
}

pub fn build_images(images: &[ImageOptions]) -> Result<Vec<Images>> {
    images
        .iter()
        .map(|image| {
            require(&[
                ("placeholder", is_present(&image.placeholder)),
                ("data", image.data.is_some()),
                ("type", is_present(&image.mime_type)),
            ])?;
            let mime = resolve_mime_type(image.mime_type.as_deref().unwrap_or_default())?;
            Ok(Images {
                placeholder: image.placeholder.clone().unwrap_or_default(),
                image: image.data.clone().unwrap_or_default(),
                r#type: mime as i32,
            })
        })
        .collect()
}

/// Validate the body and build the wire content.
pub fn build_mail_content(content: &MailContent) -> Result<proto::MailContent> {
    ensure_body(content)?;
    Ok(proto::MailContent {
        html: content.html.clone().unwrap_or_default(),
        text: content.text.clone().unwrap_or_default(),
        tracking: content.tracking,
        images: build_images(&content.images)?,
    })
}

mod base64_data {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| STANDARD.decode(s.as_bytes()).map_err(serde::de::Error::custom))
            .transpose()
    }
}
