//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::path::PathBuf;
use std::process;

use papermap::feed::FeedError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Failed to open the input feed
    FeedOpen { path: PathBuf, error: std::io::Error },
    /// Failed to decode the input feed
    FeedDecode { source: String, error: FeedError },
    /// Failed to write the placed points
    OutputWrite { path: PathBuf, error: std::io::Error },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::FeedDecode { .. } = self {
            eprintln!();
            eprintln!("The feed must be a JSON array of report records:");
            eprintln!("  [{{\"lat\": 52.5, \"lon\": 13.4, \"name\": \"...\", ...}}]");
            eprintln!("Only lat and lon are required.");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::FeedOpen { path, error } => {
                write!(f, "Failed to open feed {}: {}", path.display(), error)
            }
            CliError::FeedDecode { source, error } => {
                write!(f, "Failed to decode feed {}: {}", source, error)
            }
            CliError::OutputWrite { path, error } => {
                write!(f, "Failed to write {}: {}", path.display(), error)
            }
        }
    }
}

impl std::error::Error for CliError {}
