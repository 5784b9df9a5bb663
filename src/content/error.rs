//! Errors surfaced by content readers

use std::path::PathBuf;
use thiserror::Error;

use crate::i18n::Locale;

#[derive(Error, Debug)]
pub enum ContentError {
    /// No entry for the slug in the requested locale or the default locale
    #[error("No post {slug:?} found for locale {locale}")]
    NotFound { locale: Locale, slug: String },

    /// The content directory itself cannot be read
    #[error("Content directory {path:?} is not readable: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A content file could not be read
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single entry failed validation; readers skip these
    #[error("Invalid entry {path:?}: {reason}")]
    InvalidEntry { path: PathBuf, reason: String },
}

impl ContentError {
    /// Whether this is the "no such post" outcome rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound { .. })
    }

    pub(crate) fn invalid(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ContentError::InvalidEntry {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
