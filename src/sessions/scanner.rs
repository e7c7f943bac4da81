/// Session log scanner
///
/// Lists the session log files the desktop UI shows in its history view.
/// One file per session, `.jsonl`, timestamped by last modification.

use crate::error::Result;
use crate::timeline::Timestamped;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// File extension session logs are written with
const SESSION_EXTENSION: &str = "jsonl";

/// A session log file on disk
#[derive(Debug, Clone, Serialize)]
pub struct SessionLog {
    pub path: PathBuf,
    /// File stem, shown as the session name
    pub name: String,
    /// Last modification time of the file
    pub timestamp: DateTime<Local>,
}

impl Timestamped for SessionLog {
    fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

/// Lists session logs from a directory
pub struct SessionScanner;

impl SessionScanner {
    /// Default session directory under the user's home
    pub fn default_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".sessiondeck").join("sessions"))
    }

    /// Scan `dir` for session logs, newest first.
    ///
    /// Non-recursive. Files without the session extension are skipped.
    /// A missing directory is not an error, it just means no sessions yet.
    pub fn scan<P: AsRef<Path>>(dir: P) -> Result<Vec<SessionLog>> {
        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut sessions = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().and_then(|e| e.to_str()) != Some(SESSION_EXTENSION) {
                continue;
            }

            let stem = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem.to_string(),
                None => continue,
            };

            // Titled logs carry it in their header line, otherwise the
            // filename has to do
            let name = Self::read_title(&path).unwrap_or(stem);

            let modified = entry.metadata()?.modified()?;

            sessions.push(SessionLog {
                path,
                name,
                timestamp: DateTime::<Local>::from(modified),
            });
        }

        // Newest first, so buckets come out newest-first too
        sessions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Ok(sessions)
    }

    /// Read the session title from the log's first JSON line, if it has one.
    ///
    /// A malformed or title-less header line is not an error; the caller
    /// falls back to the file stem.
    fn read_title(path: &Path) -> Option<String> {
        let file = fs::File::open(path).ok()?;
        let mut first_line = String::new();
        BufReader::new(file).read_line(&mut first_line).ok()?;

        let header: serde_json::Value = serde_json::from_str(first_line.trim()).ok()?;
        header
            .get("title")
            .and_then(|t| t.as_str())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scan_missing_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        let sessions = SessionScanner::scan(&missing).unwrap();
        assert!(sessions.is_empty());
    }

    #[test]
    fn test_scan_picks_up_only_session_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("alpha.jsonl"), "{}").unwrap();
        fs::write(temp.path().join("beta.jsonl"), "{}").unwrap();
        fs::write(temp.path().join("notes.txt"), "x").unwrap();
        fs::write(temp.path().join("README.md"), "x").unwrap();

        let sessions = SessionScanner::scan(temp.path()).unwrap();

        assert_eq!(sessions.len(), 2);
        let mut names: Vec<&str> = sessions.iter().map(|s| s.name.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_scan_is_non_recursive() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("top.jsonl"), "{}").unwrap();
        let nested = temp.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("deep.jsonl"), "{}").unwrap();

        let sessions = SessionScanner::scan(temp.path()).unwrap();

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].name, "top");
    }

    #[test]
    fn test_titled_log_uses_header_title() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("abc123.jsonl"),
            "{\"title\":\"Fixing the build\",\"turns\":12}\n{\"role\":\"user\"}\n",
        )
        .unwrap();

        let sessions = SessionScanner::scan(temp.path()).unwrap();

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].name, "Fixing the build");
    }

    #[test]
    fn test_malformed_header_falls_back_to_stem() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("broken.jsonl"), "not json at all\n").unwrap();
        fs::write(temp.path().join("untitled.jsonl"), "{\"title\":\"\"}\n").unwrap();

        let sessions = SessionScanner::scan(temp.path()).unwrap();

        let mut names: Vec<&str> = sessions.iter().map(|s| s.name.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["broken", "untitled"]);
    }

    #[test]
    fn test_scan_orders_newest_first() {
        let temp = TempDir::new().unwrap();
        let older = temp.path().join("older.jsonl");
        let newer = temp.path().join("newer.jsonl");
        fs::write(&older, "{}").unwrap();
        fs::write(&newer, "{}").unwrap();

        // Push the mtimes apart deterministically
        let past = std::time::SystemTime::now() - std::time::Duration::from_secs(3600);
        let file = fs::File::open(&older).unwrap();
        file.set_modified(past).unwrap();

        let sessions = SessionScanner::scan(temp.path()).unwrap();

        assert_eq!(sessions[0].name, "newer");
        assert_eq!(sessions[1].name, "older");
    }
}
