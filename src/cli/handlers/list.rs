use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::collection::MemoryCollection;
use crate::model::Memory;

pub async fn handle_list(ctx: &CommandContext, json: bool) -> Result<()> {
    let mut collection = MemoryCollection::new();
    collection.reload(&ctx.service).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(collection.memories())?);
    } else {
        print_memory_list(collection.memories());
    }
    Ok(())
}

fn print_memory_list(memories: &[Memory]) {
    if memories.is_empty() {
        println!("Your memory collection is waiting... add your first memory with `scrapbook add`.");
        return;
    }

    for memory in memories {
        print!(
            "{} {} {}",
            memory.id.cyan(),
            memory.display_date().dimmed(),
            memory.caption
        );
        if let Some(ref location) = memory.location {
            print!(" {}", format!("@ {}", location).magenta());
        }
        println!();
    }
}
