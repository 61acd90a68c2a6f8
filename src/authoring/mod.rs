//! Authoring tools: convert problem MDX and category MDC files into JSON
//! records and SQL seed statements, one file or a whole content tree at a time.

pub mod batch;
pub mod catalog;
mod category;
mod error;
mod problem;
pub mod sql;

pub use category::{CategoryRecord, parse_category_json};
pub use error::AuthoringError;
pub use problem::{ProblemExample, ProblemRecord, parse_problem_json};

use std::path::Path;

/// Which kind of authoring file or record is being handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RecordKind {
    Problem,
    Category,
}

impl RecordKind {
    /// Source file extension (without dot).
    pub fn source_extension(self) -> &'static str {
        match self {
            RecordKind::Problem => "mdx",
            RecordKind::Category => "mdc",
        }
    }

    /// Subdirectory of the data dir holding records of this kind.
    pub fn data_subdir(self) -> &'static str {
        match self {
            RecordKind::Problem => "problems",
            RecordKind::Category => "categories",
        }
    }
}

/// Reject identifiers that would escape the data directory when used as path parts.
fn check_path_segment(field: &'static str, value: &str) -> Result<(), AuthoringError> {
    let bad = value.is_empty()
        || value == "."
        || value == ".."
        || value.contains(['/', '\\'])
        || Path::new(value).is_absolute();
    if bad {
        return Err(AuthoringError::InvalidIdentifier {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Keep a walked entry, or log why it was unreadable and skip it.
fn readable_entry(entry: walkdir::Result<walkdir::DirEntry>) -> Option<walkdir::DirEntry> {
    match entry {
        Ok(entry) => Some(entry),
        Err(e) => {
            log::warn!("Skipping unreadable entry: {}", e);
            None
        }
    }
}
