use anyhow::Result;
use colored::Colorize;

use crate::config::{BackendSettings, CONFIG_FILE_NAME, ScrapbookConfig};

pub fn handle_init(bucket: String, table: String) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        anyhow::bail!("Scrapbook already initialized at {}", config_path.display());
    }

    let config = ScrapbookConfig {
        backend: BackendSettings {
            bucket,
            table,
            ..Default::default()
        },
        upload: Default::default(),
    };
    config.validate()?;
    config.save(&config_path)?;

    println!(
        "{} scrapbook in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    println!(
        "  Next:   set SUPABASE_URL and SUPABASE_ANON_KEY, then run `scrapbook setup`"
    );

    Ok(())
}
