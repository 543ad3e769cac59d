//! Storage layer for the scrapbook.
//!
//! Photos go to a hosted object store and memory records to a hosted
//! structured store. Both are reached through the traits below so the
//! service can be handed any backend at startup.
//!
//! ## Components
//!
//! - [`SupabaseClient`]: the shared, explicitly constructed backend handle
//! - [`SupabaseStorage`]: [`PhotoStorage`] over Supabase Storage
//! - [`SupabaseRecords`]: [`RecordStore`] over the PostgREST API
//! - [`InMemoryBackend`]: both traits in process memory, for tests

mod client;
mod in_memory;
mod objects;
mod records;

pub use client::SupabaseClient;
pub(crate) use client::check_response;
pub use in_memory::InMemoryBackend;
pub use objects::SupabaseStorage;
pub use records::SupabaseRecords;

use crate::error::Result;
use crate::model::{Memory, NewMemory, PhotoFile};
use async_trait::async_trait;

/// Object store for photo files.
#[async_trait]
pub trait PhotoStorage: Send + Sync {
    /// Store `file` under a freshly generated path and return its public URL.
    ///
    /// Fails with `UploadFailed`; never retries.
    async fn upload(&self, file: &PhotoFile) -> Result<String>;
}

/// Structured store holding memory records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert one record; the store assigns id and timestamps.
    async fn create(&self, memory: &NewMemory) -> Result<Memory>;

    /// All records, newest `created_at` first.
    async fn list(&self) -> Result<Vec<Memory>>;

    /// Remove a record. Deleting an unknown id succeeds.
    async fn delete(&self, id: &str) -> Result<()>;
}

const PATH_ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const PATH_SUFFIX_LENGTH: usize = 12;

/// Object path for a new upload: `<prefix>/<unix-millis>-<random>.<ext>`.
///
/// The extension comes from the file's logical name, `jpg` when it has none.
pub fn object_path(prefix: &str, file: &PhotoFile) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix = nanoid::format(nanoid::rngs::default, &PATH_ALPHABET, PATH_SUFFIX_LENGTH);
    let ext = file.extension().unwrap_or_else(|| "jpg".to_string());
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        format!("{}-{}.{}", millis, suffix, ext)
    } else {
        format!("{}/{}-{}.{}", prefix, millis, suffix, ext)
    }
}
