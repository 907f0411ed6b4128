//! Reconciliation of a Groovy library directory with its indy jars
//!
//! [`Reconciler`] turns `<root>/lib` into a directory of hard links where
//! every `<stem>-indy.jar` found in `<root>/indy` shadows the original
//! `<stem>.jar`. The pristine directory is kept as `<root>/lib.orig` and
//! [`Reconciler::restore`] puts it back.

pub mod error;
pub mod pattern;
pub mod reconcile;
pub mod restore;

pub use error::{Error, Result};
pub use pattern::{indy_stem, linked_name};
pub use reconcile::{FillPolicy, ReconcileOptions, ReconcileReport, Reconciler, reconcile};
pub use restore::restore;
