//! Execution gate for filesystem mutations
//!
//! Every mutation the reconciler performs is expressed as an [`Action`] and
//! executed through a [`Gate`]. The gate decides, from its [`ExecMode`],
//! whether the action is traced and whether it touches the filesystem at all.

use std::path::{Path, PathBuf};

use crate::{FileSystem, Result};

/// How mutations are executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecMode {
    /// Report actions without performing them
    pub dry_run: bool,
    /// Trace every action
    pub verbose: bool,
}

impl ExecMode {
    pub fn dry_run() -> Self {
        Self {
            dry_run: true,
            verbose: false,
        }
    }

    pub fn verbose() -> Self {
        Self {
            dry_run: false,
            verbose: true,
        }
    }

    /// Dry-run always traces.
    pub fn traces(&self) -> bool {
        self.dry_run || self.verbose
    }
}

/// A single filesystem mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Link { src: PathBuf, dst: PathBuf },
    Rename { from: PathBuf, to: PathBuf },
    RemoveTree { path: PathBuf },
    MakeDir { path: PathBuf },
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Link { src, dst } => {
                write!(f, "Link \"{}\" to \"{}\"", src.display(), dst.display())
            }
            Self::Rename { from, to } => {
                write!(f, "Rename \"{}\" to \"{}\"", from.display(), to.display())
            }
            Self::RemoveTree { path } => {
                write!(f, "Remove \"{}\" and its children", path.display())
            }
            Self::MakeDir { path } => write!(f, "Create directory \"{}\"", path.display()),
        }
    }
}

/// Whether an action reached the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Simulated,
}

/// Single entry point for filesystem mutations.
pub struct Gate<F> {
    fs: F,
    mode: ExecMode,
    journal: Vec<Action>,
}

impl<F: FileSystem> Gate<F> {
    pub fn new(fs: F, mode: ExecMode) -> Self {
        Self {
            fs,
            mode,
            journal: Vec::new(),
        }
    }

    /// Read access to the underlying filesystem.
    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Actions executed so far, applied or simulated.
    pub fn journal(&self) -> &[Action] {
        &self.journal
    }

    pub fn take_journal(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.journal)
    }

    pub fn link(&mut self, src: &Path, dst: &Path) -> Result<Outcome> {
        self.execute(Action::Link {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
        })
    }

    pub fn rename(&mut self, from: &Path, to: &Path) -> Result<Outcome> {
        self.execute(Action::Rename {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        })
    }

    pub fn remove_tree(&mut self, path: &Path) -> Result<Outcome> {
        self.execute(Action::RemoveTree {
            path: path.to_path_buf(),
        })
    }

    pub fn make_dir(&mut self, path: &Path) -> Result<Outcome> {
        self.execute(Action::MakeDir {
            path: path.to_path_buf(),
        })
    }

    /// Trace and perform `action` according to the gate's mode.
    pub fn execute(&mut self, action: Action) -> Result<Outcome> {
        if self.mode.traces() {
            let prefix = if self.mode.dry_run { "[dry-run] " } else { "" };
            tracing::info!("{}{}", prefix, action);
        }
        if self.mode.dry_run {
            self.journal.push(action);
            return Ok(Outcome::Simulated);
        }

        match &action {
            Action::Link { src, dst } => self.fs.hard_link(src, dst)?,
            Action::Rename { from, to } => self.fs.rename(from, to)?,
            Action::RemoveTree { path } => self.fs.remove_dir_all(path)?,
            Action::MakeDir { path } => self.fs.create_dir(path)?,
        }
        self.journal.push(action);
        Ok(Outcome::Applied)
    }
}
