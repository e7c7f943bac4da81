/// sessiondeck library
///
/// Core functionality for the session history and changelog views.

pub mod changelog;
pub mod error;
pub mod sessions;
pub mod timeline;

// Re-exports for convenience
pub use error::{DeckError, Result};
