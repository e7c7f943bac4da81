/// Changelog handling
///
/// Fetching and parsing of the app's release notes.

pub mod fetcher;
pub mod parser;

pub use fetcher::ChangelogFetcher;
pub use parser::{ChangelogParser, VersionEntry};
