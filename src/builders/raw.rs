use std::path::{Path, PathBuf};

use tracing::debug;

use crate::builders::mail::{build_additional_infos, AdditionalOptions};
use crate::error::{Result, SendlixError};
use crate::proto::EmlMailRequest;

/// Where a pre-built MIME message comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmlSource {
    Bytes(Vec<u8>),
    Path(PathBuf),
}

impl EmlSource {
    /// Read the message. File errors surface as [`SendlixError::Io`].
    pub async fn load(&self) -> Result<Vec<u8>> {
        match self {
            EmlSource::Bytes(bytes) => Ok(bytes.clone()),
            EmlSource::Path(path) => {
                debug!(path = %path.display(), "reading eml file");
                Ok(tokio::fs::read(path).await?)
            }
        }
    }
}

impl From<Vec<u8>> for EmlSource {
    fn from(bytes: Vec<u8>) -> Self {
        EmlSource::Bytes(bytes)
    }
}

impl From<&[u8]> for EmlSource {
    fn from(bytes: &[u8]) -> Self {
        EmlSource::Bytes(bytes.to_vec())
    }
}

impl From<PathBuf> for EmlSource {
    fn from(path: PathBuf) -> Self {
        EmlSource::Path(path)
    }
}

impl From<&Path> for EmlSource {
    fn from(path: &Path) -> Self {
        EmlSource::Path(path.to_path_buf())
    }
}

/// The service validates MIME; only emptiness is checked here.
pub fn build_eml_request(
    mail: Vec<u8>,
    additional: Option<&AdditionalOptions>,
) -> Result<EmlMailRequest> {
    if mail.is_empty() {
        return Err(SendlixError::EmptyContent("raw message has no bytes"));
    }
    Ok(EmlMailRequest {
        mail,
        additional_infos: additional.map(build_additional_infos).transpose()?,
    })
}
