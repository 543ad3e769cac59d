//! The memory workflow: add (compress, upload, record), list, remove.

use crate::compress::{self, DEFAULT_QUALITY, MAX_DIMENSION};
use crate::config::{ScrapbookConfig, UploadSettings};
use crate::error::{Result, ScrapbookError};
use crate::model::{Memory, NewMemory};
use crate::storage::{PhotoStorage, RecordStore, SupabaseClient, SupabaseRecords, SupabaseStorage};
use crate::validation::MemoryDraft;
use std::sync::Arc;

/// Composes a [`PhotoStorage`] and a [`RecordStore`] into the operations the
/// collection view needs.
///
/// Cheap to clone; clones share the same backends. Calls are not serialized
/// against each other.
#[derive(Clone)]
pub struct MemoryService {
    storage: Arc<dyn PhotoStorage>,
    records: Arc<dyn RecordStore>,
    quality: f32,
    max_dimension: u32,
}

impl MemoryService {
    pub fn new(storage: Arc<dyn PhotoStorage>, records: Arc<dyn RecordStore>) -> Self {
        Self {
            storage,
            records,
            quality: DEFAULT_QUALITY,
            max_dimension: MAX_DIMENSION,
        }
    }

    /// Service backed by one Supabase project.
    pub fn supabase(client: &SupabaseClient, config: &ScrapbookConfig) -> Self {
        let storage = SupabaseStorage::new(client.clone(), &config.backend);
        let records = SupabaseRecords::new(client.clone(), &config.backend);
        Self::new(Arc::new(storage), Arc::new(records)).with_upload_settings(&config.upload)
    }

    pub fn with_upload_settings(mut self, settings: &UploadSettings) -> Self {
        self.quality = settings.quality;
        self.max_dimension = settings.max_dimension;
        self
    }

    /// Compress the photo, upload it, then insert the record, in that order.
    ///
    /// If the insert fails after a successful upload the stored photo is left
    /// behind; nothing is rolled back.
    pub async fn add_memory(&self, draft: MemoryDraft) -> Result<Memory> {
        let (photo, caption, location) = draft.into_parts();
        let (quality, max_dimension) = (self.quality, self.max_dimension);

        let compressed = tokio::task::spawn_blocking(move || {
            compress::compress_with_limit(&photo, quality, max_dimension)
        })
        .await
        .map_err(|e| ScrapbookError::Decode(format!("compression task failed: {}", e)))??;

        let photo_url = self.storage.upload(&compressed).await?;

        let new_memory = NewMemory::new(photo_url, caption, location);
        match self.records.create(&new_memory).await {
            Ok(memory) => {
                tracing::info!(id = %memory.id, caption = %memory.caption, "Memory added");
                Ok(memory)
            }
            Err(e) => {
                tracing::warn!(
                    photo_url = %new_memory.photo_url,
                    error = %e,
                    "Record creation failed, uploaded photo is orphaned"
                );
                Err(e)
            }
        }
    }

    /// Delete the record only; its stored photo stays in the object store.
    pub async fn remove_memory(&self, id: &str) -> Result<()> {
        self.records.delete(id).await?;
        tracing::info!(%id, "Memory removed");
        Ok(())
    }

    pub async fn list_memories(&self) -> Result<Vec<Memory>> {
        self.records.list().await
    }
}
