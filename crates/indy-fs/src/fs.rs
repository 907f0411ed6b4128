//! Filesystem capability

use std::ffi::OsString;
use std::fs;
use std::path::Path;

use crate::{Error, FsOp, Result};

/// Elementary filesystem operations used by the reconciler.
///
/// Reads are used directly; mutations are expected to go through a
/// [`Gate`](crate::Gate) so they honour dry-run and verbose modes.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    /// Names of the entries in `dir`, sorted, exactly as stored on disk.
    fn list_dir(&self, dir: &Path) -> Result<Vec<OsString>>;

    fn hard_link(&self, src: &Path, dst: &Path) -> Result<()>;

    fn rename(&self, from: &Path, to: &Path) -> Result<()>;

    fn remove_dir_all(&self, path: &Path) -> Result<()>;

    fn create_dir(&self, path: &Path) -> Result<()>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn list_dir(&self, dir: &Path) -> Result<Vec<OsString>> {
        (**self).list_dir(dir)
    }

    fn hard_link(&self, src: &Path, dst: &Path) -> Result<()> {
        (**self).hard_link(src, dst)
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        (**self).rename(from, to)
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        (**self).remove_dir_all(path)
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        (**self).create_dir(path)
    }
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl FileSystem for RealFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dir(&self, dir: &Path) -> Result<Vec<OsString>> {
        let entries = fs::read_dir(dir).map_err(|e| Error::io(FsOp::List, dir, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(FsOp::List, dir, e))?;
            names.push(entry.file_name());
        }
        names.sort();
        Ok(names)
    }

    fn hard_link(&self, src: &Path, dst: &Path) -> Result<()> {
        fs::hard_link(src, dst).map_err(|e| Error::io(FsOp::Link, dst, e))
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        fs::rename(from, to).map_err(|e| Error::io(FsOp::Rename, from, e))
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        fs::remove_dir_all(path).map_err(|e| Error::io(FsOp::RemoveTree, path, e))
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        fs::create_dir(path).map_err(|e| Error::io(FsOp::MakeDir, path, e))
    }
}
