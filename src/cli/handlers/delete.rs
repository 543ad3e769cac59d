use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

use super::{CommandContext, print_notification};
use crate::notify;

pub async fn handle_delete(ctx: &CommandContext, id: &str, force: bool, json: bool) -> Result<()> {
    if !force {
        print!(
            "Are you sure you want to delete memory {}? [y/N] ",
            id.cyan()
        );
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    ctx.service.remove_memory(id).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "deleted": id }))?
        );
    } else {
        print_notification(&notify::memory_removed());
    }
    Ok(())
}
