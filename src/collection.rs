//! Client-side copy of the memory collection.
//!
//! The collection is loaded with [`MemoryCollection::reload`] and then mutated
//! optimistically as memories are added or removed through it. It is never
//! refreshed implicitly: changes made to the backing store by anyone else stay
//! invisible until the next reload.

use crate::error::Result;
use crate::model::Memory;
use crate::service::MemoryService;
use crate::validation::MemoryDraft;

#[derive(Debug, Default, Clone)]
pub struct MemoryCollection {
    memories: Vec<Memory>,
    loaded: bool,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the local copy with the store's current contents.
    ///
    /// On failure the previous contents are kept.
    pub async fn reload(&mut self, service: &MemoryService) -> Result<usize> {
        let memories = service.list_memories().await?;
        self.memories = memories;
        self.loaded = true;
        Ok(self.memories.len())
    }

    /// Add through the service, then put the new memory at the front.
    pub async fn add(&mut self, service: &MemoryService, draft: MemoryDraft) -> Result<&Memory> {
        let memory = service.add_memory(draft).await?;
        self.insert_added(memory);
        Ok(&self.memories[0])
    }

    /// Delete through the service, then drop the memory locally.
    pub async fn remove(&mut self, service: &MemoryService, id: &str) -> Result<()> {
        service.remove_memory(id).await?;
        self.forget(id);
        Ok(())
    }

    /// Record a memory created elsewhere as the newest entry.
    pub fn insert_added(&mut self, memory: Memory) {
        self.memories.retain(|m| m.id != memory.id);
        self.memories.insert(0, memory);
    }

    /// Drop a memory from the local copy. Returns whether it was present.
    pub fn forget(&mut self, id: &str) -> bool {
        let before = self.memories.len();
        self.memories.retain(|m| m.id != id);
        self.memories.len() != before
    }

    pub fn memories(&self) -> &[Memory] {
        &self.memories
    }

    pub fn get(&self, id: &str) -> Option<&Memory> {
        self.memories.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.memories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memories.is_empty()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}
