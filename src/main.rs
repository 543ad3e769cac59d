use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use scrapbook::cli::handlers::{
    CommandContext, handle_add, handle_delete, handle_init, handle_list, handle_setup,
    print_notification,
};
use scrapbook::cli::{Cli, Commands};
use scrapbook::config::{Credentials, ScrapbookConfig};
use scrapbook::error::ScrapbookError;
use scrapbook::notify;
use scrapbook::storage::SupabaseClient;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    scrapbook::logging::init(cli.verbose, cli.log_file.clone());

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Runs before credentials are required
    let command = match cli.command {
        Commands::Init { bucket, table } => return handle_init(bucket, table),
        command => command,
    };

    let config = load_config(cli.config.as_deref())?;
    let credentials = Credentials::from_env()?;
    let client = SupabaseClient::new(&credentials)?;
    let ctx = CommandContext::new(config, client);

    match command {
        Commands::Add {
            photo,
            caption,
            location,
            json,
        } => handle_add(&ctx, &photo, &caption, location.as_deref(), json).await,
        Commands::List { json } => handle_list(&ctx, json).await,
        Commands::Delete { id, force, json } => handle_delete(&ctx, &id, force, json).await,
        Commands::Setup { create, json } => handle_setup(&ctx, create, json).await,
        Commands::Init { bucket, table } => handle_init(bucket, table),
    }
}

fn load_config(path: Option<&Path>) -> Result<ScrapbookConfig> {
    match path {
        Some(path) => ScrapbookConfig::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => {
            let cwd = std::env::current_dir()?;
            ScrapbookConfig::load(&cwd).context("Failed to load scrapbook configuration")
        }
    }
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<ScrapbookError>() {
        Some(e) => {
            print_notification(&notify::notification_for_error(e));
            eprintln!("  {}", e);
        }
        None => eprintln!("Error: {:#}", err),
    }
    tracing::debug!(error = ?err, "Command failed");
}
