//! Input validation for new memories.

use crate::error::{Result, ScrapbookError};
use crate::model::PhotoFile;

/// Largest photo accepted for upload (10 MB).
pub const MAX_PHOTO_BYTES: u64 = 10 * 1024 * 1024;

/// Maximum allowed length for a caption, in characters.
pub const MAX_CAPTION_LENGTH: usize = 500;

/// Maximum allowed length for a location, in characters.
pub const MAX_LOCATION_LENGTH: usize = 200;

/// A memory that passed validation and may be handed to the service.
///
/// Only constructible through [`MemoryDraft::new`].
#[derive(Debug, Clone)]
pub struct MemoryDraft {
    photo: PhotoFile,
    caption: String,
    location: Option<String>,
}

impl MemoryDraft {
    /// Validate raw form input: trims caption and location, rejects a missing
    /// photo or blank caption, and enforces the `max_bytes` size limit.
    pub fn new(
        photo: Option<PhotoFile>,
        caption: &str,
        location: Option<&str>,
        max_bytes: u64,
    ) -> Result<Self> {
        let caption = caption.trim();
        let photo = match photo {
            Some(p) if !p.bytes.is_empty() => p,
            _ => return Err(missing_information()),
        };
        if caption.is_empty() {
            return Err(missing_information());
        }
        validate_caption(caption)?;
        validate_photo_size(&photo, max_bytes)?;
        let location = normalize_location(location)?;

        Ok(Self {
            photo,
            caption: caption.to_string(),
            location,
        })
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn into_parts(self) -> (PhotoFile, String, Option<String>) {
        (self.photo, self.caption, self.location)
    }
}

fn missing_information() -> ScrapbookError {
    ScrapbookError::Validation("A memory needs both a photo and a caption".to_string())
}

/// Validates an already-trimmed caption.
pub fn validate_caption(caption: &str) -> Result<()> {
    if caption.is_empty() {
        return Err(ScrapbookError::Validation(
            "Caption cannot be empty".to_string(),
        ));
    }
    if caption.chars().count() > MAX_CAPTION_LENGTH {
        return Err(ScrapbookError::InvalidInput(format!(
            "Caption exceeds maximum length of {} characters",
            MAX_CAPTION_LENGTH
        )));
    }
    Ok(())
}

pub fn validate_photo_size(photo: &PhotoFile, max_bytes: u64) -> Result<()> {
    if photo.size() > max_bytes {
        return Err(ScrapbookError::TooLarge(format!(
            "{} is {}, the limit is {}",
            photo.name,
            format_file_size(photo.size()),
            format_file_size(max_bytes)
        )));
    }
    Ok(())
}

/// Trims a location; blank input becomes `None`.
pub fn normalize_location(location: Option<&str>) -> Result<Option<String>> {
    let Some(location) = location.map(str::trim).filter(|l| !l.is_empty()) else {
        return Ok(None);
    };
    if location.chars().count() > MAX_LOCATION_LENGTH {
        return Err(ScrapbookError::InvalidInput(format!(
            "Location exceeds maximum length of {} characters",
            MAX_LOCATION_LENGTH
        )));
    }
    Ok(Some(location.to_string()))
}

/// Format file size in human-readable format
pub fn format_file_size(size: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

    if size == 0 {
        return "0 B".to_string();
    }

    let mut size = size as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.1} {}", size, UNITS[unit_idx])
    }
}
