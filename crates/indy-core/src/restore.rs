//! Undo a reconciliation by putting `lib.orig` back in place of `lib`.

use indy_fs::{Action, ExecMode, FileSystem, GroovyLayout, NormalizedPath, RealFs};

use crate::reconcile::{ReconcileOptions, Reconciler};
use crate::{Error, Result};

impl<F: FileSystem> Reconciler<F> {
    /// Remove the rebuilt `lib` and rename `lib.orig` back to `lib`.
    ///
    /// Returns the actions executed, applied or simulated.
    pub fn restore(&mut self, root: impl Into<NormalizedPath>) -> Result<Vec<Action>> {
        let layout = GroovyLayout::new(root);
        let lib = layout.lib();
        let lib_orig = layout.lib_orig();
        self.gate.take_journal();

        if !self.gate.fs().exists(&lib_orig) {
            return Err(Error::NothingToRestore { path: lib_orig });
        }
        if self.gate.fs().exists(&lib) {
            self.gate
                .remove_tree(&lib)
                .map_err(|source| Error::ResetFailed {
                    path: lib.clone(),
                    source,
                })?;
        }
        self.gate
            .rename(&lib_orig, &lib)
            .map_err(|source| Error::RestoreFailed {
                path: lib.clone(),
                source,
            })?;

        tracing::debug!("Restored {}", lib.display());
        Ok(self.gate.take_journal())
    }
}

/// Restore the installation at `root` on the real filesystem.
pub fn restore(root: impl Into<NormalizedPath>, mode: ExecMode) -> Result<Vec<Action>> {
    Reconciler::new(RealFs, ReconcileOptions::from(mode)).restore(root)
}
