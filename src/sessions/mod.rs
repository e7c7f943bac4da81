/// Session log listing
///
/// Produces the timestamped items the timeline groups.

pub mod scanner;

pub use scanner::{SessionLog, SessionScanner};
