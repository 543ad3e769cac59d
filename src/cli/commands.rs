use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scrapbook")]
#[command(
    author,
    version,
    about = "A digital scrapbook of photo memories, stored in your Supabase project"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .scrapbook.yml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true, env = "SCRAPBOOK_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a .scrapbook.yml with default settings in the current directory
    Init {
        /// Storage bucket for photos
        #[arg(long, default_value = "memory-photos")]
        bucket: String,

        /// Table holding memory records
        #[arg(long, default_value = "memories")]
        table: String,
    },

    /// Add a new memory from a photo
    #[command(visible_alias = "new")]
    Add {
        /// Path to the photo
        photo: PathBuf,

        /// What made this moment special
        #[arg(short, long)]
        caption: String,

        /// Where the photo was taken
        #[arg(short, long)]
        location: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all memories, newest first
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a memory (the stored photo is kept)
    #[command(visible_alias = "rm")]
    Delete {
        /// Memory ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that the memories table and photo bucket exist
    Setup {
        /// Try to create whatever is missing
        #[arg(long)]
        create: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
