//! Domain Errors
//!
//! Error types for the chat pipeline and the startup rules load.

use std::path::PathBuf;

use thiserror::Error;

/// Per-request failures, converted to JSON error bodies at the HTTP
/// boundary. None of these crash the process.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The request body was absent, undecodable, or carried no usable
    /// `message` field.
    #[error("No message provided")]
    MissingMessage,

    /// The message was empty after trimming surrounding whitespace.
    #[error("Empty message")]
    EmptyMessage,

    /// The completion service failed. The underlying description is
    /// carried through so the caller sees what went wrong.
    #[error("{0}")]
    Upstream(String),
}

impl ChatError {
    /// True for caller-correctable failures (400 at the HTTP boundary);
    /// everything else maps to 500.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingMessage | Self::EmptyMessage)
    }
}

/// Startup-time failures while loading the rules document.
///
/// How these surface is decided by [`crate::RulesPolicy`], not here.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("Failed to read rules document {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to extract text from {}: {message}", .path.display())]
    Extract { path: PathBuf, message: String },
}
