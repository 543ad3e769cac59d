//! Data models for the scrapbook.
//!
//! - [`Memory`]: a stored scrapbook entry
//! - [`NewMemory`]: the insert payload for a memory
//! - [`PhotoFile`]: an image file held in memory

mod memory;
mod photo;

pub use memory::{Memory, NewMemory};
pub use photo::{PhotoFile, content_type_for};
