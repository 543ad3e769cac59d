use super::RecordStore;
use super::client::{SupabaseClient, check_response};
use crate::config::BackendSettings;
use crate::error::{Result, ScrapbookError};
use crate::model::{Memory, NewMemory};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};

/// Postgres `invalid_text_representation`, returned when a filter value does
/// not parse as the column type (e.g. a malformed uuid).
const INVALID_TEXT_REPRESENTATION: &str = "22P02";

/// Memory records in a PostgREST-exposed table.
pub struct SupabaseRecords {
    client: SupabaseClient,
    table: String,
}

impl SupabaseRecords {
    pub fn new(client: SupabaseClient, settings: &BackendSettings) -> Self {
        Self {
            client,
            table: settings.table.clone(),
        }
    }

    fn table_url(&self) -> Result<url::Url> {
        self.client.endpoint(["rest", "v1", self.table.as_str()])
    }
}

#[async_trait]
impl RecordStore for SupabaseRecords {
    async fn create(&self, memory: &NewMemory) -> Result<Memory> {
        tracing::info!(caption = %memory.caption, "Creating memory record");

        let response = self
            .client
            .request(Method::POST, self.table_url()?)
            .header("Prefer", "return=representation")
            .json(&[memory])
            .send()
            .await
            .map_err(ScrapbookError::record)?;
        let response = check_response(response).await.map_err(ScrapbookError::record)?;

        let mut rows: Vec<Memory> = response.json().await.map_err(ScrapbookError::record)?;
        if rows.is_empty() {
            return Err(ScrapbookError::record("insert returned no rows"));
        }
        Ok(rows.swap_remove(0))
    }

    async fn list(&self) -> Result<Vec<Memory>> {
        let mut url = self.table_url()?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("order", "created_at.desc");

        let response = self
            .client
            .request(Method::GET, url)
            .send()
            .await
            .map_err(ScrapbookError::record)?;
        let response = check_response(response).await.map_err(ScrapbookError::record)?;

        let memories: Vec<Memory> = response.json().await.map_err(ScrapbookError::record)?;
        tracing::debug!(count = memories.len(), "Listed memories");
        Ok(memories)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        tracing::info!(%id, "Deleting memory record");

        let mut url = self.table_url()?;
        url.query_pairs_mut().append_pair("id", &format!("eq.{}", id));

        let response = self
            .client
            .request(Method::DELETE, url)
            .header("Prefer", "return=minimal")
            .send()
            .await
            .map_err(ScrapbookError::record)?;

        if response.status() == StatusCode::BAD_REQUEST {
            let body = response.text().await.unwrap_or_default();
            if is_invalid_key(&body) {
                // No row can have this id
                tracing::debug!(%id, "Id is not a valid key, nothing to delete");
                return Ok(());
            }
            return Err(ScrapbookError::record(format!(
                "HTTP {}: {}",
                StatusCode::BAD_REQUEST,
                body.trim()
            )));
        }
        check_response(response).await.map_err(ScrapbookError::record)?;
        Ok(())
    }
}

fn is_invalid_key(body: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(body)
        .map(|error| error["code"] == INVALID_TEXT_REPRESENTATION)
        .unwrap_or(false)
}
