//! Error types for foldertree

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions that stop a run.
#[derive(Debug, Error)]
pub enum FolderTreeError {
    #[error("{0}")]
    Usage(String),

    #[error("Invalid root directory: {}", .0.display())]
    InvalidRoot(PathBuf),

    #[error("Failed to write output file {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FolderTreeError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            FolderTreeError::Usage(_) => 1,
            FolderTreeError::InvalidRoot(_) => 2,
            FolderTreeError::WriteOutput { .. } => 3,
        }
    }

    pub(crate) fn write_output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FolderTreeError::WriteOutput {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FolderTreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let usage = FolderTreeError::Usage("Missing required arguments".to_string());
        let root = FolderTreeError::InvalidRoot(PathBuf::from("/nope"));
        let write = FolderTreeError::write_output(
            "/out.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );

        assert_eq!(usage.exit_code(), 1);
        assert_eq!(root.exit_code(), 2);
        assert_eq!(write.exit_code(), 3);
    }

    #[test]
    fn test_write_error_includes_cause() {
        let err = FolderTreeError::write_output(
            "/out.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("/out.txt"), "{}", message);
        assert!(message.contains("denied"), "{}", message);
    }
}
