// sessiondeck - your session history, grouped by when it happened
//
// This is the main entry point. Parses CLI args and dispatches to handlers.

use chrono::Local;
use sessiondeck_lib::{
    changelog::{ChangelogFetcher, ChangelogParser},
    sessions::SessionScanner,
    timeline::{group_by_bucket, group_title},
    Result,
};
use std::env;
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    // Grab whatever the user typed
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "sessions" => handle_sessions(&args[2..]),
        "changelog" => handle_changelog(&args[2..]).await,
        "version" | "-v" | "--version" => {
            println!("sessiondeck v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

fn handle_sessions(args: &[String]) -> Result<()> {
    // Explicit dir wins, otherwise fall back to the default location
    let dir = match args.first() {
        Some(path) => PathBuf::from(path),
        None => match SessionScanner::default_dir() {
            Some(dir) => dir,
            None => {
                eprintln!("Could not determine home directory");
                return Ok(());
            }
        },
    };

    let sessions = SessionScanner::scan(&dir)?;

    if sessions.is_empty() {
        println!("No sessions found in {}", dir.display());
        return Ok(());
    }

    // One reference instant for the whole listing
    let groups = group_by_bucket(sessions, Local::now());

    for group in &groups {
        println!("\n{}", group_title(group));
        println!("{}", "-".repeat(40));
        for session in &group.items {
            println!(
                "  {}  {}",
                session.timestamp.format("%Y-%m-%d %H:%M"),
                session.name
            );
        }
    }

    Ok(())
}

async fn handle_changelog(args: &[String]) -> Result<()> {
    let url = match args.first() {
        Some(url) => url,
        None => {
            eprintln!("Error: No changelog URL provided");
            return Ok(());
        }
    };

    let text = ChangelogFetcher::new().fetch(url).await?;
    let entries = ChangelogParser::new().parse(&text);

    if entries.is_empty() {
        println!("No versions found in changelog.");
        return Ok(());
    }

    for entry in &entries {
        println!("\nv{}", entry.version);
        for change in &entry.changes {
            println!("  - {}", change);
        }
    }

    Ok(())
}

fn print_usage() {
    println!(
        r#"sessiondeck v{} - Your session history, grouped by when it happened

USAGE:
    sessiondeck <COMMAND> [OPTIONS]

COMMANDS:
    sessions [dir]         List sessions grouped by Today/Yesterday/...
    changelog <url>        Fetch and show a changelog
    version                Show version
    help                   Show this help

EXAMPLES:
    sessiondeck sessions
    sessiondeck sessions ~/logs
    sessiondeck changelog https://example.com/CHANGELOG.md
"#,
        env!("CARGO_PKG_VERSION")
    );
}
