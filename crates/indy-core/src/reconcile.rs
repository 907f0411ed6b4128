//! Reconciler implementation
//!
//! A run performs four steps in order, stopping at the first failure:
//!
//! 1. Back up `lib` to `lib.orig` unless `lib.orig` already exists.
//! 2. Remove whatever `lib` holds and create it afresh.
//! 3. Link every `<stem>-indy.jar` from `indy` into `lib` as `<stem>.jar`.
//! 4. Link every original not already placed by step 3.
//!
//! All mutations go through a [`Gate`], so a dry run walks exactly the same
//! path without touching the filesystem.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use indy_fs::{
    Action, ExecMode, FileSystem, Gate, GroovyLayout, NormalizedPath, Outcome, RealFs,
};

use crate::pattern::{indy_stem, linked_name};
use crate::{Error, Result};

/// What to do when linking an original jar fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FillPolicy {
    /// Abort the run with [`Error::LinkFailed`]
    #[default]
    Strict,
    /// Log a warning, record the name in [`ReconcileReport::skipped`] and go on
    BestEffort,
}

/// Options for a reconcile run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOptions {
    pub mode: ExecMode,
    pub fill_policy: FillPolicy,
}

impl From<ExecMode> for ReconcileOptions {
    fn from(mode: ExecMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

/// Report from a reconcile run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// `lib` was moved to `lib.orig` during this run
    pub backed_up: bool,
    /// Names in `lib` linked to an indy jar
    pub indy_linked: Vec<OsString>,
    /// Names in `lib` linked to an original jar
    pub originals_linked: Vec<OsString>,
    /// Originals that failed to link under [`FillPolicy::BestEffort`]
    pub skipped: Vec<OsString>,
    /// Actions executed, applied or simulated
    pub actions: Vec<Action>,
}

/// Rebuilds a Groovy `lib` directory so indy jars take precedence.
pub struct Reconciler<F> {
    pub(crate) gate: Gate<F>,
    fill_policy: FillPolicy,
}

impl<F: FileSystem> Reconciler<F> {
    pub fn new(fs: F, options: ReconcileOptions) -> Self {
        Self {
            gate: Gate::new(fs, options.mode),
            fill_policy: options.fill_policy,
        }
    }

    /// Run all four steps against the installation at `root`.
    pub fn reconcile(&mut self, root: impl Into<NormalizedPath>) -> Result<ReconcileReport> {
        let layout = GroovyLayout::new(root);
        let mut report = ReconcileReport::default();
        // Leave nothing from an earlier failed call in this run's journal
        self.gate.take_journal();

        let originals = self.backup(&layout, &mut report)?;
        self.reset(&layout, report.backed_up)?;
        let placed = self.link_indy(&layout, &mut report)?;
        self.fill_originals(&layout, &originals, &placed, &mut report)?;

        report.actions = self.gate.take_journal();
        tracing::debug!(
            indy = report.indy_linked.len(),
            originals = report.originals_linked.len(),
            skipped = report.skipped.len(),
            "Reconciled {}",
            layout.lib().display()
        );
        Ok(report)
    }

    /// Step 1. Returns the directory the originals can be listed from.
    fn backup(
        &mut self,
        layout: &GroovyLayout,
        report: &mut ReconcileReport,
    ) -> Result<PathBuf> {
        let lib = layout.lib();
        let lib_orig = layout.lib_orig();

        if self.gate.fs().exists(&lib_orig) {
            return Ok(lib_orig);
        }
        if !self.gate.fs().exists(&lib) {
            return Err(Error::MissingSource { path: lib });
        }

        let outcome = self
            .gate
            .rename(&lib, &lib_orig)
            .map_err(|source| Error::BackupFailed {
                path: lib_orig.clone(),
                source,
            })?;
        report.backed_up = true;

        // A simulated rename leaves the originals where they were
        Ok(match outcome {
            Outcome::Applied => lib_orig,
            Outcome::Simulated => lib,
        })
    }

    /// Step 2.
    fn reset(&mut self, layout: &GroovyLayout, backed_up: bool) -> Result<()> {
        let lib = layout.lib();

        if !backed_up && self.gate.fs().exists(&lib) {
            self.gate
                .remove_tree(&lib)
                .map_err(|source| Error::ResetFailed {
                    path: lib.clone(),
                    source,
                })?;
        }
        self.gate
            .make_dir(&lib)
            .map_err(|source| Error::CreateFailed {
                path: lib.clone(),
                source,
            })?;
        Ok(())
    }

    /// Step 3. Returns the names placed in `lib`.
    fn link_indy(
        &mut self,
        layout: &GroovyLayout,
        report: &mut ReconcileReport,
    ) -> Result<BTreeSet<OsString>> {
        let lib = layout.lib();
        let indy = layout.indy();
        tracing::debug!("Linking indy enabled jars from {}", indy.display());

        let names = self
            .gate
            .fs()
            .list_dir(&indy)
            .map_err(|source| Error::ListFailed {
                path: indy.clone(),
                source,
            })?;

        let mut placed = BTreeSet::new();
        for name in names {
            let Some(stem) = indy_stem(&name) else {
                continue;
            };
            let target = linked_name(&stem);
            let src = indy.join(&name);
            let dst = lib.join(&target);
            self.gate
                .link(&src, &dst)
                .map_err(|source| Error::LinkFailed { src, dst, source })?;

            report.indy_linked.push(target.clone());
            placed.insert(target);
        }
        Ok(placed)
    }

    /// Step 4. Indy jars placed by step 3 win over same-named originals.
    fn fill_originals(
        &mut self,
        layout: &GroovyLayout,
        originals: &Path,
        placed: &BTreeSet<OsString>,
        report: &mut ReconcileReport,
    ) -> Result<()> {
        let lib = layout.lib();
        let lib_orig = layout.lib_orig();
        tracing::debug!("Linking originals from {}", originals.display());

        let names = self
            .gate
            .fs()
            .list_dir(originals)
            .map_err(|source| Error::ListFailed {
                path: originals.to_path_buf(),
                source,
            })?;

        for name in names {
            if placed.contains(&name) {
                continue;
            }
            let src = lib_orig.join(&name);
            let dst = lib.join(&name);
            match self.gate.link(&src, &dst) {
                Ok(_) => report.originals_linked.push(name),
                Err(source) => match self.fill_policy {
                    FillPolicy::Strict => return Err(Error::LinkFailed { src, dst, source }),
                    FillPolicy::BestEffort => {
                        tracing::warn!("Skipping original {}: {}", name.to_string_lossy(), source);
                        report.skipped.push(name);
                    }
                },
            }
        }
        Ok(())
    }
}

/// Reconcile the installation at `root` on the real filesystem.
pub fn reconcile(
    root: impl Into<NormalizedPath>,
    options: ReconcileOptions,
) -> Result<ReconcileReport> {
    Reconciler::new(RealFs, options).reconcile(root)
}
