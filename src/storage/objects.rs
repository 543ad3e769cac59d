use super::client::{SupabaseClient, check_response};
use super::{PhotoStorage, object_path};
use crate::config::BackendSettings;
use crate::error::{Result, ScrapbookError};
use crate::model::PhotoFile;
use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;

/// Photo uploads into a public Supabase Storage bucket.
pub struct SupabaseStorage {
    client: SupabaseClient,
    bucket: String,
    path_prefix: String,
}

impl SupabaseStorage {
    pub fn new(client: SupabaseClient, settings: &BackendSettings) -> Self {
        Self {
            client,
            bucket: settings.bucket.clone(),
            path_prefix: settings.path_prefix.clone(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Non-expiring URL for an object in a public bucket.
    pub fn public_url(&self, path: &str) -> Result<String> {
        let segments = ["storage", "v1", "object", "public", self.bucket.as_str()]
            .into_iter()
            .chain(path.split('/'));
        Ok(self.client.endpoint(segments)?.to_string())
    }
}

#[async_trait]
impl PhotoStorage for SupabaseStorage {
    async fn upload(&self, file: &PhotoFile) -> Result<String> {
        let path = object_path(&self.path_prefix, file);
        let segments = ["storage", "v1", "object", self.bucket.as_str()]
            .into_iter()
            .chain(path.split('/'));
        let url = self.client.endpoint(segments)?;

        tracing::info!(bucket = %self.bucket, %path, bytes = file.bytes.len(), "Uploading photo");

        let response = self
            .client
            .request(Method::POST, url)
            .header(CONTENT_TYPE, &file.content_type)
            .header("x-upsert", "false")
            .body(file.bytes.clone())
            .send()
            .await
            .map_err(ScrapbookError::upload)?;
        check_response(response)
            .await
            .map_err(ScrapbookError::upload)?;

        self.public_url(&path)
    }
}
