//! Error types shared across the crate.
//!
//! Redaction itself is total. Errors only come from building a filter or a
//! template, from writing to a sink, or from the row source behind the driver.

use std::io;

/// Errors produced by `filtered-logger`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The field pattern could not be compiled.
    ///
    /// Field names are escaped, so this only happens when the compiled
    /// pattern exceeds the regex size limits.
    #[error("failed to compile field pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A line template could not be parsed.
    #[error("invalid line template `{template}`: {reason}")]
    Template { template: String, reason: String },

    /// Writing a formatted line to the sink failed.
    #[error("failed to write log line: {0}")]
    Io(#[from] io::Error),

    /// The row source failed while querying or iterating.
    #[error("row source failed: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    pub(crate) fn template(template: &str, reason: impl Into<String>) -> Self {
        Self::Template {
            template: template.to_string(),
            reason: reason.into(),
        }
    }

    /// Wraps a row source error.
    pub fn from_source<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Source(Box::new(err))
    }
}

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;
