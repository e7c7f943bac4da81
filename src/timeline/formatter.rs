/// Section title formatting
///
/// Renders the header shown above each bucket in the list view.

use crate::timeline::grouper::Group;

/// Format a section title as `"<label> (<count>)"`.
///
/// The count is rendered as a plain base-10 integer, including zero.
pub fn section_title(label: &str, count: usize) -> String {
    format!("{} ({})", label, count)
}

/// Section title for a group, from its bucket label and item count
pub fn group_title<T>(group: &Group<T>) -> String {
    section_title(&group.bucket.label(), group.items.len())
}
