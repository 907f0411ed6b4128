//! [`MemoryFs`], an in-memory filesystem for exercising the reconciler
//! without touching disk.
//!
//! Files are identified by inode numbers so hard links can be told apart
//! from copies. `/` always exists; every other directory must be created.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use indy_fs::{Error, FileSystem, FsOp, Result};

/// A filesystem node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Dir,
    File { inode: u64 },
}

#[derive(Debug, Default)]
struct State {
    nodes: BTreeMap<PathBuf, Node>,
    next_inode: u64,
    failing: BTreeSet<(FsOp, PathBuf)>,
}

fn is_root(path: &Path) -> bool {
    path.has_root() && path.parent().is_none()
}

impl State {
    fn check(&self, op: FsOp, path: &Path) -> Result<()> {
        if self.failing.contains(&(op, path.to_path_buf())) {
            return Err(err(op, path, ErrorKind::PermissionDenied));
        }
        Ok(())
    }

    fn is_dir(&self, path: &Path) -> bool {
        is_root(path) || self.nodes.get(path) == Some(&Node::Dir)
    }

    fn exists(&self, path: &Path) -> bool {
        is_root(path) || self.nodes.contains_key(path)
    }

    fn parent_is_dir(&self, path: &Path) -> bool {
        path.parent().is_some_and(|parent| self.is_dir(parent))
    }

    fn ensure_ancestors(&mut self, path: &Path) {
        for dir in path.ancestors().skip(1) {
            if dir.as_os_str().is_empty() || is_root(dir) {
                break;
            }
            self.nodes.entry(dir.to_path_buf()).or_insert(Node::Dir);
        }
    }

    fn subtree(&self, root: &Path) -> Vec<PathBuf> {
        self.nodes
            .keys()
            .filter(|key| key.starts_with(root))
            .cloned()
            .collect()
    }
}

fn err(op: FsOp, path: &Path, kind: ErrorKind) -> Error {
    Error::io(op, path, std::io::Error::from(kind))
}

/// In-memory [`FileSystem`].
#[derive(Debug, Default)]
pub struct MemoryFs {
    state: RefCell<State>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `path` and any missing ancestors as directories.
    pub fn add_dir(&self, path: impl AsRef<Path>) -> &Self {
        let path = path.as_ref();
        let mut state = self.state.borrow_mut();
        state.ensure_ancestors(path);
        state.nodes.insert(path.to_path_buf(), Node::Dir);
        self
    }

    /// Create a file with a fresh inode, creating missing ancestors.
    pub fn add_file(&self, path: impl AsRef<Path>) -> u64 {
        let path = path.as_ref();
        let mut state = self.state.borrow_mut();
        state.ensure_ancestors(path);
        state.next_inode += 1;
        let inode = state.next_inode;
        state.nodes.insert(path.to_path_buf(), Node::File { inode });
        inode
    }

    /// Create one file per name inside `dir`.
    pub fn add_files(&self, dir: impl AsRef<Path>, names: &[&str]) -> &Self {
        let dir = dir.as_ref();
        self.add_dir(dir);
        for name in names {
            self.add_file(dir.join(name));
        }
        self
    }

    pub fn inode(&self, path: impl AsRef<Path>) -> Option<u64> {
        match self.state.borrow().nodes.get(path.as_ref()) {
            Some(Node::File { inode }) => Some(*inode),
            _ => None,
        }
    }

    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.state.borrow().is_dir(path.as_ref())
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.state.borrow().exists(path.as_ref())
    }

    /// Sorted names directly inside `dir`; empty when `dir` is missing.
    pub fn entries(&self, dir: impl AsRef<Path>) -> Vec<OsString> {
        self.list_dir(dir.as_ref()).unwrap_or_default()
    }

    /// Make `op` fail with `PermissionDenied` at `path`.
    ///
    /// The path is the link destination for [`FsOp::Link`], the source for
    /// [`FsOp::Rename`] and the directory itself otherwise.
    pub fn fail(&self, op: FsOp, path: impl AsRef<Path>) {
        self.state
            .borrow_mut()
            .failing
            .insert((op, path.as_ref().to_path_buf()));
    }

    /// Every node keyed by its path.
    pub fn snapshot(&self) -> BTreeMap<PathBuf, Node> {
        self.state.borrow().nodes.clone()
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.state.borrow().exists(path)
    }

    fn list_dir(&self, dir: &Path) -> Result<Vec<OsString>> {
        let state = self.state.borrow();
        state.check(FsOp::List, dir)?;
        if !state.exists(dir) {
            return Err(err(FsOp::List, dir, ErrorKind::NotFound));
        }
        if !state.is_dir(dir) {
            return Err(err(FsOp::List, dir, ErrorKind::NotADirectory));
        }

        let mut names: Vec<OsString> = state
            .nodes
            .keys()
            .filter(|key| key.parent() == Some(dir))
            .filter_map(|key| key.file_name().map(|name| name.to_os_string()))
            .collect();
        names.sort();
        Ok(names)
    }

    fn hard_link(&self, src: &Path, dst: &Path) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.check(FsOp::Link, dst)?;
        let inode = match state.nodes.get(src) {
            Some(Node::File { inode }) => *inode,
            Some(Node::Dir) => return Err(err(FsOp::Link, src, ErrorKind::PermissionDenied)),
            None => return Err(err(FsOp::Link, src, ErrorKind::NotFound)),
        };
        if state.exists(dst) {
            return Err(err(FsOp::Link, dst, ErrorKind::AlreadyExists));
        }
        if !state.parent_is_dir(dst) {
            return Err(err(FsOp::Link, dst, ErrorKind::NotFound));
        }
        state.nodes.insert(dst.to_path_buf(), Node::File { inode });
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.check(FsOp::Rename, from)?;
        if !state.nodes.contains_key(from) {
            return Err(err(FsOp::Rename, from, ErrorKind::NotFound));
        }
        if state.exists(to) {
            return Err(err(FsOp::Rename, to, ErrorKind::AlreadyExists));
        }
        if !state.parent_is_dir(to) {
            return Err(err(FsOp::Rename, to, ErrorKind::NotFound));
        }
        if to.starts_with(from) {
            return Err(err(FsOp::Rename, to, ErrorKind::InvalidInput));
        }

        for key in state.subtree(from) {
            if let (Some(node), Ok(rest)) = (state.nodes.remove(&key), key.strip_prefix(from)) {
                let moved = if rest.as_os_str().is_empty() {
                    to.to_path_buf()
                } else {
                    to.join(rest)
                };
                state.nodes.insert(moved, node);
            }
        }
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.check(FsOp::RemoveTree, path)?;
        match state.nodes.get(path) {
            Some(Node::Dir) => {}
            Some(Node::File { .. }) => {
                return Err(err(FsOp::RemoveTree, path, ErrorKind::NotADirectory));
            }
            None => return Err(err(FsOp::RemoveTree, path, ErrorKind::NotFound)),
        }
        for key in state.subtree(path) {
            state.nodes.remove(&key);
        }
        Ok(())
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.check(FsOp::MakeDir, path)?;
        if state.exists(path) {
            return Err(err(FsOp::MakeDir, path, ErrorKind::AlreadyExists));
        }
        if !state.parent_is_dir(path) {
            return Err(err(FsOp::MakeDir, path, ErrorKind::NotFound));
        }
        state.nodes.insert(path.to_path_buf(), Node::Dir);
        Ok(())
    }
}
