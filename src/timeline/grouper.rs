/// Group aggregation
///
/// Buckets a collection of timestamped items into relative-time groups.
/// The reference instant is computed once per call so a day rollover
/// mid-aggregation cannot split a bucket.

use crate::timeline::bucket::{classify, Bucket};
use chrono::{DateTime, Local};
use serde::Serialize;

/// Anything carrying a timestamp can be grouped
pub trait Timestamped {
    fn timestamp(&self) -> DateTime<Local>;
}

/// One bucket's worth of items, in original relative order
#[derive(Debug, Clone, Serialize)]
pub struct Group<T> {
    pub bucket: Bucket,
    pub sort_key: i64,
    pub items: Vec<T>,
}

/// Group `items` by relative-time bucket against the single reference
/// instant `now`.
///
/// Items keep the relative order they had in the input within each group
/// (never re-sorted by timestamp). Only non-empty groups are returned,
/// ordered ascending by sort key, so the most recent bucket comes first.
pub fn group_by_bucket<T: Timestamped>(items: Vec<T>, now: DateTime<Local>) -> Vec<Group<T>> {
    let mut groups: Vec<Group<T>> = Vec::new();

    for item in items {
        let bucket = classify(item.timestamp(), now);
        match groups.iter_mut().find(|g| g.bucket == bucket) {
            Some(group) => group.items.push(item),
            None => groups.push(Group {
                sort_key: bucket.sort_key(),
                bucket,
                items: vec![item],
            }),
        }
    }

    groups.sort_by_key(|g| g.sort_key);
    groups
}
