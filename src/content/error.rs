//! Content errors

use std::path::PathBuf;
use thiserror::Error;

use super::frontmatter::FrontMatterError;

/// Errors raised while reading the content directory
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid front-matter in {path:?}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },

    #[error("Duplicate post id '{id}': {first:?} and {second:?}")]
    DuplicateId {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },
}

impl ContentError {
    /// The file (or directory) the error is about
    pub fn path(&self) -> &std::path::Path {
        match self {
            ContentError::Io { path, .. } | ContentError::FrontMatter { path, .. } => path,
            ContentError::DuplicateId { second, .. } => second,
        }
    }
}
