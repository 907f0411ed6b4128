//! Error types for indy-fs

use std::path::PathBuf;

/// Result type for indy-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// The filesystem operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FsOp {
    List,
    Link,
    Rename,
    RemoveTree,
    MakeDir,
}

impl std::fmt::Display for FsOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::List => "list",
            Self::Link => "link",
            Self::Rename => "rename",
            Self::RemoveTree => "remove",
            Self::MakeDir => "mkdir",
        };
        f.write_str(s)
    }
}

/// Errors that can occur in indy-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{op} failed at {}: {source}", path.display())]
    Io {
        op: FsOp,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(op: FsOp, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// The underlying I/O error kind.
    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            Self::Io { source, .. } => source.kind(),
        }
    }
}
