use super::{PhotoStorage, RecordStore, object_path};
use crate::error::{Result, ScrapbookError};
use crate::model::{Memory, NewMemory, PhotoFile};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

const BASE_URL: &str = "memory://scrapbook";

#[derive(Default)]
struct State {
    objects: HashMap<String, Vec<u8>>,
    uploaded_urls: Vec<String>,
    upload_attempts: usize,
    records: Vec<Memory>,
    next_id: u64,
    last_created: Option<DateTime<Utc>>,
    fail_uploads: bool,
    fail_creates: bool,
}

/// Object store and record store kept in process memory.
///
/// Timestamps are strictly increasing in insertion order. Failures can be
/// switched on to exercise error paths.
pub struct InMemoryBackend {
    path_prefix: String,
    state: Mutex<State>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self {
            path_prefix: "memories".to_string(),
            state: Mutex::new(State::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn fail_uploads(&self, fail: bool) {
        self.state().fail_uploads = fail;
    }

    pub fn fail_creates(&self, fail: bool) {
        self.state().fail_creates = fail;
    }

    /// Number of upload attempts that reached the store, failed ones included.
    pub fn upload_attempts(&self) -> usize {
        self.state().upload_attempts
    }

    pub fn uploaded_urls(&self) -> Vec<String> {
        self.state().uploaded_urls.clone()
    }

    pub fn object_count(&self) -> usize {
        self.state().objects.len()
    }

    pub fn record_count(&self) -> usize {
        self.state().records.len()
    }

    /// Stored bytes behind a URL returned by `upload`.
    pub fn object(&self, url: &str) -> Option<Vec<u8>> {
        let path = url.strip_prefix(BASE_URL)?.trim_start_matches('/');
        self.state().objects.get(path).cloned()
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PhotoStorage for InMemoryBackend {
    async fn upload(&self, file: &PhotoFile) -> Result<String> {
        let mut state = self.state();
        state.upload_attempts += 1;
        if state.fail_uploads {
            return Err(ScrapbookError::upload("object store unavailable"));
        }
        let path = object_path(&self.path_prefix, file);
        let url = format!("{}/{}", BASE_URL, path);
        state.objects.insert(path, file.bytes.clone());
        state.uploaded_urls.push(url.clone());
        Ok(url)
    }
}

#[async_trait]
impl RecordStore for InMemoryBackend {
    async fn create(&self, memory: &NewMemory) -> Result<Memory> {
        let mut state = self.state();
        if state.fail_creates {
            return Err(ScrapbookError::record("record store unavailable"));
        }
        if memory.caption.trim().is_empty() {
            return Err(ScrapbookError::record("caption violates not-empty constraint"));
        }

        let now = Utc::now();
        let created_at = match state.last_created {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        state.last_created = Some(created_at);
        state.next_id += 1;

        let record = Memory {
            id: format!("mem-{:06}", state.next_id),
            photo_url: memory.photo_url.clone(),
            caption: memory.caption.clone(),
            location: memory.location.clone(),
            created_at,
            updated_at: created_at,
        };
        state.records.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<Memory>> {
        let mut records = self.state().records.clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.state().records.retain(|m| m.id != id);
        Ok(())
    }
}
