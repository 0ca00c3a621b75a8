//! Files sub-client — upload, fetch, download, delete.

use crate::client::FlowstackClient;
use crate::domain::file::wire::{FileDeletedResponse, FileResponse};
use crate::error::SdkError;

/// Sub-client for file operations.
pub struct Files<'a> {
    pub(crate) client: &'a FlowstackClient,
}

impl<'a> Files<'a> {
    /// Upload a file as `multipart/form-data`.
    ///
    /// Uploads are never retried; re-invoke on failure if the caller
    /// still holds the bytes.
    pub async fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<FileResponse, SdkError> {
        Ok(self
            .client
            .http
            .upload_file(file_name, bytes, content_type)
            .await?)
    }

    /// Get a file's metadata.
    pub async fn get(&self, file_id: &str) -> Result<FileResponse, SdkError> {
        Ok(self.client.http.get_file(file_id).await?)
    }

    /// Download raw file content.
    pub async fn download(&self, file_id: &str) -> Result<Vec<u8>, SdkError> {
        Ok(self.client.http.download_file(file_id).await?)
    }

    /// Delete a file.
    pub async fn delete(&self, file_id: &str) -> Result<FileDeletedResponse, SdkError> {
        Ok(self.client.http.delete_file(file_id).await?)
    }
}
