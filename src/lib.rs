//! # Scrapbook - a digital scrapbook of photo memories
//!
//! Photos are downscaled locally, uploaded to a public Supabase Storage bucket,
//! and described by a record in a `memories` table. Memories can be listed,
//! newest first, and deleted.
//!
//! ## Quick Start
//!
//! ```bash
//! export SUPABASE_URL=https://<project>.supabase.co
//! export SUPABASE_ANON_KEY=<anon key>
//!
//! # Make sure the table and bucket exist
//! scrapbook setup --create
//!
//! # Add a memory
//! scrapbook add beach.jpg --caption "First date" --location Paris
//!
//! # Browse and delete
//! scrapbook list
//! scrapbook delete <id>
//! ```
//!
//! ## Modules
//!
//! - [`compress`]: Photo downscaling and JPEG re-encoding
//! - [`storage`]: Object store and record store clients
//! - [`service`]: The add / list / remove workflow
//! - [`collection`]: Optimistic client-side copy of the collection
//! - [`notify`]: Error-to-message table for presentation code

/// Command-line interface definitions using clap.
pub mod cli;

pub mod collection;
pub mod compress;

/// Configuration loading and management.
///
/// Handles `.scrapbook.yml` files and environment-supplied credentials.
pub mod config;

/// Error types and result aliases.
///
/// Defines `ScrapbookError`, its `ErrorKind` classification and `Result<T>`.
pub mod error;

pub mod logging;

/// Data models: `Memory`, `NewMemory` and `PhotoFile`.
pub mod model;

pub mod notify;
pub mod service;
pub mod setup;
pub mod storage;

/// Input validation for new memories.
pub mod validation;
