/// Markdown changelog parser
///
/// Turns freeform release-notes text into structured version entries.
/// Tolerant by design: malformed input degrades to partial or empty
/// output, it never fails.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single parsed version block from the changelog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    /// Version token with surrounding brackets stripped ("[1.2.0]" -> "1.2.0")
    pub version: String,
    /// Change descriptions in source order
    pub changes: Vec<String>,
}

impl VersionEntry {
    fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            changes: Vec::new(),
        }
    }
}

/// Parser state: either no version block is open, or we are accumulating
/// bullets into the currently open one.
enum ParseState {
    NoOpenVersion,
    OpenVersion(VersionEntry),
}

/// Line-scanning changelog parser
pub struct ChangelogParser {
    bracketed_re: Regex,
    bare_re: Regex,
}

impl ChangelogParser {
    /// Create a new parser instance
    pub fn new() -> Self {
        // "## [1.2.0]" possibly with trailing text ("## [1.2.0] - 2024-01-15")
        let bracketed_re = Regex::new(r"^##\s+\[([^\]]+)\]").unwrap();
        // "## 1.2.0" - the whole rest of the line is the token
        let bare_re = Regex::new(r"^##\s+(.+?)\s*$").unwrap();
        Self {
            bracketed_re,
            bare_re,
        }
    }

    /// Parse a raw changelog blob into version entries, in document order.
    ///
    /// Rules:
    /// * lines before the first version header are discarded
    /// * a header with no bullets yields an entry with an empty change list
    /// * `-` and `*` bullets are interchangeable and may be mixed
    /// * a bullet that is only the marker contributes nothing
    /// * anything else (blank, prose, other headings) is ignored
    pub fn parse(&self, text: &str) -> Vec<VersionEntry> {
        let mut entries = Vec::new();
        let mut state = ParseState::NoOpenVersion;

        for line in text.lines() {
            let trimmed = line.trim();

            if let Some(version) = self.match_header(trimmed) {
                // Flush whatever was open, then start the new block
                if let ParseState::OpenVersion(entry) = state {
                    entries.push(entry);
                }
                state = ParseState::OpenVersion(VersionEntry::new(version));
                continue;
            }

            if let ParseState::OpenVersion(ref mut entry) = state {
                if let Some(change) = Self::match_bullet(trimmed) {
                    entry.changes.push(change);
                }
            }
            // NoOpenVersion: nothing to attach the line to, drop it
        }

        // End of input flushes the open block
        if let ParseState::OpenVersion(entry) = state {
            entries.push(entry);
        }

        entries
    }

    /// Extract the version token from a header line, if it is one.
    ///
    /// A bracketed token wins even with trailing text after it, so
    /// "## [1.2.0] - 2024-01-15" yields "1.2.0".
    fn match_header(&self, line: &str) -> Option<String> {
        if let Some(captures) = self.bracketed_re.captures(line) {
            return captures.get(1).map(|m| m.as_str().trim().to_string());
        }
        let captures = self.bare_re.captures(line)?;
        captures.get(1).map(|m| m.as_str().trim().to_string())
    }

    /// Extract the change text from a bullet line, if it carries any
    fn match_bullet(line: &str) -> Option<String> {
        let rest = line.strip_prefix('-').or_else(|| line.strip_prefix('*'))?;
        let text = rest.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

impl Default for ChangelogParser {
    fn default() -> Self {
        Self::new()
    }
}
