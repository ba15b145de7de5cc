//! File-level interface between the in-memory mesh structures and the three
//! on-disk representations. Every operation opens, fully processes, and
//! closes its file within a single call; malformed input is always fatal to
//! that call, and nothing is ever logged here.

/// Path-level operations on the binary mesh format.
pub mod binary;

/// The `.ele` tetrahedron-connectivity text codec.
pub mod ele;

/// The `.node` point-cloud text codec.
pub mod node;

pub(crate) mod text;

use std::path::{Path, PathBuf};

#[remain::sorted]
#[derive(thiserror::Error, Debug)]
pub enum Err {
    #[error("Decode error: {0}")]
    DecodeError(#[from] crate::decode::Err),

    #[error("Encode error: {0}")]
    EncodeError(#[from] crate::encode::Err),

    #[error("line {line}: {path}: {reason}")]
    FormatError {
        path: PathBuf,
        /// 1-based physical line number, comments and blank lines included.
        line: u64,
        reason: String,
    },

    #[error("unable to open {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path} does not exist")]
    NotFound { path: PathBuf },

    #[error("Validation error: {0}")]
    ValidationError(#[from] crate::core::mesh::Err),
}

impl Err {
    pub(crate) fn format(path: &Path, line: u64, reason: impl Into<String>) -> Self {
        Err::FormatError {
            path: path.to_path_buf(),
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Err::IoError {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Fails with [`Err::NotFound`] when `path` does not name an existing file.
pub(crate) fn check_exists(path: &Path) -> Result<(), Err> {
    if !path.exists() {
        return Err(Err::NotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
