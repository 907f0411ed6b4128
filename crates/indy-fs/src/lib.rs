//! Filesystem layer for indynize
//!
//! Provides normalized paths, the Groovy installation layout, a
//! [`FileSystem`] capability and the [`Gate`] every mutation goes through.

pub mod constants;
pub mod error;
pub mod fs;
pub mod gate;
pub mod layout;
pub mod path;

pub use constants::GroovyPath;
pub use error::{Error, FsOp, Result};
pub use fs::{FileSystem, RealFs};
pub use gate::{Action, ExecMode, Gate, Outcome};
pub use layout::GroovyLayout;
pub use path::NormalizedPath;
