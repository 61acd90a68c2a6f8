//! Errors from the authoring tools.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AuthoringError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no frontmatter block (--- ... ---) found")]
    MissingFrontmatter,

    #[error("Invalid frontmatter: {0}")]
    Frontmatter(#[from] serde_yaml::Error),

    #[error("no ```json code block found")]
    MissingJsonBlock,

    #[error("examples must contain at least one entry")]
    NoExamples,

    #[error("{field} {value:?} cannot be used as a path segment")]
    InvalidIdentifier { field: &'static str, value: String },

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] globset::Error),
}

impl AuthoringError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AuthoringError::Io {
            path: path.into(),
            source,
        }
    }
}
