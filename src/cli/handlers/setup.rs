use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::setup::{self, SetupStatus};

pub async fn handle_setup(ctx: &CommandContext, create: bool, json: bool) -> Result<()> {
    let settings = &ctx.config.backend;
    let mut status = setup::check_setup(&ctx.client, settings).await;

    if create && !status.is_ready() {
        if !status.table {
            if let Err(e) = setup::create_table(&ctx.client).await {
                tracing::warn!(error = %e, "Could not create memories table");
            }
        }
        if !status.storage {
            if let Err(e) = setup::create_bucket(&ctx.client, settings).await {
                tracing::warn!(error = %e, "Could not create storage bucket");
            }
        }
        status = setup::check_setup(&ctx.client, settings).await;
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "table": status.table,
                "storage": status.storage,
                "ready": status.is_ready(),
                "missing": status.missing_steps(settings),
            }))?
        );
    } else {
        print_status(&status, &settings.table, &settings.bucket);
        let steps = status.missing_steps(settings);
        if !steps.is_empty() {
            println!("\n{}", "Need to set up manually?".yellow().bold());
            for step in steps {
                println!("  - {}", step);
            }
        }
    }

    if status.is_ready() {
        Ok(())
    } else {
        anyhow::bail!("Backend is not ready")
    }
}

fn print_status(status: &SetupStatus, table: &str, bucket: &str) {
    let mark = |ok: bool| if ok { "ok".green() } else { "missing".red() };
    println!("Memories table ({}): {}", table, mark(status.table));
    println!("Photo storage  ({}): {}", bucket, mark(status.storage));
}
