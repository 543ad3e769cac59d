use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use super::{CommandContext, print_notification};
use crate::model::PhotoFile;
use crate::notify;
use crate::validation::MemoryDraft;

pub async fn handle_add(
    ctx: &CommandContext,
    photo_path: &Path,
    caption: &str,
    location: Option<&str>,
    json: bool,
) -> Result<()> {
    let photo = PhotoFile::read(photo_path)
        .with_context(|| format!("Failed to read photo {}", photo_path.display()))?;

    let draft = MemoryDraft::new(Some(photo), caption, location, ctx.config.upload.max_bytes)?;
    let memory = ctx.service.add_memory(draft).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&memory)?);
    } else {
        print_notification(&notify::memory_saved());
        println!("  {} {}", "ID:".dimmed(), memory.id.cyan());
        println!("  {} {}", "Photo:".dimmed(), memory.photo_url);
    }
    Ok(())
}
