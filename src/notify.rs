//! User-facing notifications.
//!
//! Every [`ErrorKind`] maps to exactly one short message through
//! [`ERROR_NOTIFICATIONS`]; presentation code looks messages up here instead
//! of phrasing its own.

use crate::error::{ErrorKind, ScrapbookError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    pub description: &'static str,
    pub severity: Severity,
}

const fn error(title: &'static str, description: &'static str) -> Notification {
    Notification {
        title,
        description,
        severity: Severity::Error,
    }
}

pub const ERROR_NOTIFICATIONS: &[(ErrorKind, Notification)] = &[
    (
        ErrorKind::Validation,
        error(
            "Missing information",
            "Please add both a photo and caption for your memory",
        ),
    ),
    (
        ErrorKind::InvalidInput,
        error(
            "Check your details",
            "Something about this memory isn't quite right. Please review it and try again.",
        ),
    ),
    (
        ErrorKind::TooLarge,
        error("File too large", "Please choose a photo smaller than 10 MB"),
    ),
    (
        ErrorKind::UploadFailed,
        error(
            "Upload failed",
            "We couldn't upload your photo. Please try again.",
        ),
    ),
    (
        ErrorKind::Record,
        error(
            "Oops!",
            "Something went wrong with your memory collection. Please try again.",
        ),
    ),
    (
        ErrorKind::Decode,
        error(
            "Unreadable photo",
            "That file doesn't look like an image we can read.",
        ),
    ),
    (
        ErrorKind::Config,
        error(
            "Setup required",
            "Set SUPABASE_URL and SUPABASE_ANON_KEY, then check your configuration.",
        ),
    ),
];

const FALLBACK: Notification = error("Oops!", "Something went wrong. Please try again.");

pub fn notification_for(kind: ErrorKind) -> Notification {
    ERROR_NOTIFICATIONS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, n)| *n)
        .unwrap_or(FALLBACK)
}

pub fn notification_for_error(err: &ScrapbookError) -> Notification {
    notification_for(err.kind())
}

pub fn memory_saved() -> Notification {
    Notification {
        title: "Memory saved!",
        description: "Your beautiful moment has been added to your collection",
        severity: Severity::Success,
    }
}

pub fn memory_removed() -> Notification {
    Notification {
        title: "Memory removed",
        description: "Your memory has been deleted from the collection.",
        severity: Severity::Success,
    }
}
