/// Relative-time bucketing
///
/// Classification of timestamps into human-relative buckets, grouping of
/// timestamped items, and section title formatting for the list view.

pub mod bucket;
pub mod formatter;
pub mod grouper;

pub use bucket::{classify, Bucket};
pub use formatter::{group_title, section_title};
pub use grouper::{group_by_bucket, Group, Timestamped};
