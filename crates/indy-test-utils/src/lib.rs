//! Shared test utilities for the indynize workspace.
//!
//! This crate is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`memory`] — [`MemoryFs`], an in-memory [`indy_fs::FileSystem`] with inode tracking
//! - [`groovy`] — [`TestGroovyHome`], a temporary Groovy installation on disk

pub mod groovy;
pub mod memory;

pub use groovy::{EntryState, TestGroovyHome};
pub use memory::MemoryFs;
