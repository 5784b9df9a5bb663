//! CLI commands

pub mod init;
pub mod list;
pub mod new;
pub mod show;

use crate::content::ContentError;

/// Exit status when a requested post does not exist
pub const EXIT_NOT_FOUND: u8 = 2;

/// Exit status for every other failure
pub const EXIT_FAILURE: u8 = 1;

/// Map a command error to the process exit status. A missing post is kept
/// apart from real failures so callers can tell them apart.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ContentError>() {
        Some(e) if e.is_not_found() => EXIT_NOT_FOUND,
        _ => EXIT_FAILURE,
    }
}
