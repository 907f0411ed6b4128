//! Error types for indy-core

use std::path::PathBuf;

/// Result type for indy-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reconciling or restoring a library directory
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither `lib` nor `lib.orig` exists
    #[error("missing \"{}\"", path.display())]
    MissingSource { path: PathBuf },

    #[error("failed to back up the original to \"{}\": {source}", path.display())]
    BackupFailed {
        path: PathBuf,
        #[source]
        source: indy_fs::Error,
    },

    #[error("failed to remove \"{}\": {source}", path.display())]
    ResetFailed {
        path: PathBuf,
        #[source]
        source: indy_fs::Error,
    },

    #[error("failed to create new library directory \"{}\": {source}", path.display())]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: indy_fs::Error,
    },

    #[error("failed to read \"{}\": {source}", path.display())]
    ListFailed {
        path: PathBuf,
        #[source]
        source: indy_fs::Error,
    },

    #[error("failed to link \"{}\" to \"{}\": {source}", src.display(), dst.display())]
    LinkFailed {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: indy_fs::Error,
    },

    /// `lib.orig` is absent, so there is no original layout to put back
    #[error("nothing to restore: \"{}\" does not exist", path.display())]
    NothingToRestore { path: PathBuf },

    #[error("failed to restore \"{}\": {source}", path.display())]
    RestoreFailed {
        path: PathBuf,
        #[source]
        source: indy_fs::Error,
    },
}
