mod add;
mod delete;
mod init;
mod list;
mod setup;

pub use add::handle_add;
pub use delete::handle_delete;
pub use init::handle_init;
pub use list::handle_list;
pub use setup::handle_setup;

use crate::config::ScrapbookConfig;
use crate::notify::{Notification, Severity};
use crate::service::MemoryService;
use crate::storage::SupabaseClient;
use colored::Colorize;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: ScrapbookConfig,
    pub client: SupabaseClient,
    pub service: MemoryService,
}

impl CommandContext {
    pub fn new(config: ScrapbookConfig, client: SupabaseClient) -> Self {
        let service = MemoryService::supabase(&client, &config);
        Self {
            config,
            client,
            service,
        }
    }
}

/// Print a notification: successes to stdout, errors to stderr.
pub fn print_notification(notification: &Notification) {
    match notification.severity {
        Severity::Success => {
            println!("{} {}", notification.title.green().bold(), notification.description)
        }
        Severity::Error => eprintln!(
            "{} {}",
            notification.title.red().bold(),
            notification.description
        ),
    }
}
