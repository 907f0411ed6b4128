//! Groovy installation layout
//!
//! Only the root is normalized. Directories below it are joined natively so
//! entry names read from disk are never reinterpreted.

use std::path::PathBuf;

use crate::{GroovyPath, NormalizedPath};

/// Resolved directories of one Groovy installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroovyLayout {
    root: NormalizedPath,
}

impl GroovyLayout {
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Active library directory, rebuilt on every run.
    pub fn lib(&self) -> PathBuf {
        self.dir(GroovyPath::Lib)
    }

    /// Backup of the pristine library directory.
    pub fn lib_orig(&self) -> PathBuf {
        self.dir(GroovyPath::LibOrig)
    }

    pub fn indy(&self) -> PathBuf {
        self.dir(GroovyPath::Indy)
    }

    fn dir(&self, which: GroovyPath) -> PathBuf {
        self.root.to_native().join(which)
    }
}
