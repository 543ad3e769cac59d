//! Backend readiness checks and one-time provisioning.

use crate::config::BackendSettings;
use crate::error::{Result, ScrapbookError};
use crate::storage::SupabaseClient;
use crate::validation::MAX_PHOTO_BYTES;
use reqwest::Method;
use serde::Serialize;

/// Name of the database function that creates the memories table.
pub const CREATE_TABLE_RPC: &str = "create_memories_table";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SetupStatus {
    pub table: bool,
    pub storage: bool,
}

impl SetupStatus {
    pub fn is_ready(&self) -> bool {
        self.table && self.storage
    }

    /// Manual instructions for whatever is still missing.
    pub fn missing_steps(&self, settings: &BackendSettings) -> Vec<String> {
        let mut steps = Vec::new();
        if !self.table {
            steps.push(format!(
                "Create a table called `{}` with: id (uuid, primary key), photo_url (text), \
                 caption (text), location (text, nullable), created_at (timestamptz), \
                 updated_at (timestamptz)",
                settings.table
            ));
        }
        if !self.storage {
            steps.push(format!(
                "Create a public storage bucket called `{}`",
                settings.bucket
            ));
        }
        steps
    }
}

#[derive(Serialize)]
struct ListObjects<'a> {
    prefix: &'a str,
    limit: u32,
}

#[derive(Serialize)]
struct NewBucket<'a> {
    id: &'a str,
    name: &'a str,
    public: bool,
    allowed_mime_types: [&'a str; 1],
    file_size_limit: u64,
}

/// Probe the memories table and the photo bucket. Unreachable counts as missing.
pub async fn check_setup(client: &SupabaseClient, settings: &BackendSettings) -> SetupStatus {
    let table = probe_table(client, settings).await;
    let storage = probe_bucket(client, settings).await;
    tracing::debug!(table, storage, "Setup status");
    SetupStatus { table, storage }
}

async fn probe_table(client: &SupabaseClient, settings: &BackendSettings) -> bool {
    let Ok(mut url) = client.endpoint(["rest", "v1", settings.table.as_str()]) else {
        return false;
    };
    url.query_pairs_mut()
        .append_pair("select", "id")
        .append_pair("limit", "1");
    match client.request(Method::GET, url).send().await {
        Ok(response) => response.status().is_success(),
        Err(e) => {
            tracing::warn!(error = %e, "Table probe failed");
            false
        }
    }
}

async fn probe_bucket(client: &SupabaseClient, settings: &BackendSettings) -> bool {
    let Ok(url) = client.endpoint(["storage", "v1", "object", "list", settings.bucket.as_str()])
    else {
        return false;
    };
    let body = ListObjects {
        prefix: "",
        limit: 1,
    };
    match client.request(Method::POST, url).json(&body).send().await {
        Ok(response) => response.status().is_success(),
        Err(e) => {
            tracing::warn!(error = %e, "Bucket probe failed");
            false
        }
    }
}

/// Create the public photo bucket, restricted to images up to 10 MB.
pub async fn create_bucket(client: &SupabaseClient, settings: &BackendSettings) -> Result<()> {
    let url = client.endpoint(["storage", "v1", "bucket"])?;
    let body = NewBucket {
        id: &settings.bucket,
        name: &settings.bucket,
        public: true,
        allowed_mime_types: ["image/*"],
        file_size_limit: MAX_PHOTO_BYTES,
    };
    tracing::info!(bucket = %settings.bucket, "Creating storage bucket");
    let response = client
        .request(Method::POST, url)
        .json(&body)
        .send()
        .await
        .map_err(ScrapbookError::upload)?;
    crate::storage::check_response(response)
        .await
        .map_err(ScrapbookError::upload)?;
    Ok(())
}

/// Ask the database to create the memories table through its RPC function.
pub async fn create_table(client: &SupabaseClient) -> Result<()> {
    let url = client.endpoint(["rest", "v1", "rpc", CREATE_TABLE_RPC])?;
    tracing::info!(function = CREATE_TABLE_RPC, "Creating memories table");
    let response = client
        .request(Method::POST, url)
        .json(&serde_json::json!({}))
        .send()
        .await
        .map_err(ScrapbookError::record)?;
    crate::storage::check_response(response)
        .await
        .map_err(ScrapbookError::record)?;
    Ok(())
}
