/// Error types for sessiondeck
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for sessiondeck operations
#[derive(Error, Debug)]
pub enum DeckError {
    /// Changelog endpoint answered with a non-success status
    #[error("Changelog fetch failed with status {0}")]
    FetchFailed(u16),

    /// Transport-level failure while talking to the changelog endpoint
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for sessiondeck operations
pub type Result<T> = std::result::Result<T, DeckError>;

/// Convert DeckError to a user-friendly error message
impl DeckError {
    pub fn user_message(&self) -> String {
        match self {
            DeckError::FetchFailed(status) => {
                format!("Could not download the changelog (HTTP {})", status)
            }
            DeckError::Network(e) => {
                format!(
                    "Network problem while downloading the changelog. Details: {}",
                    e
                )
            }
            DeckError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
        }
    }
}
