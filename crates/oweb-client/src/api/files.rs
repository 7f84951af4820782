//! Files API: knowledge document upload and listing.

use std::path::Path;

use reqwest::multipart::{Form, Part};

use crate::client::OwebClient;
use crate::error::{Error, Result};
use crate::outcome::Outcome;
use crate::types::KnowledgeFile;

const FILES_PATH: &str = "v1/files/";

/// Files API client.
pub struct FilesApi {
    client: OwebClient,
}

impl FilesApi {
    pub(crate) fn new(client: OwebClient) -> Self {
        Self { client }
    }

    /// Upload a document for indexing.
    ///
    /// The success payload is returned as raw JSON; its shape depends on the
    /// server version.
    pub async fn upload(&self, path: impl AsRef<Path>) -> Result<Outcome<serde_json::Value>> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        tracing::debug!(file = %path.display(), size = bytes.len(), "uploading file");

        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));
        self.client.post_multipart(FILES_PATH, form).await
    }

    /// List uploaded knowledge documents.
    pub async fn list(&self) -> Result<Outcome<Vec<KnowledgeFile>>> {
        self.client.get(FILES_PATH).await
    }
}
