//! Groovy installation and program name resolution

use std::ffi::OsString;
use std::path::PathBuf;

use indy_fs::NormalizedPath;

use crate::error::{CliError, Result};

/// Environment consulted when no installation root is given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeLookup {
    pub groovy_home: Option<PathBuf>,
    pub gvm_dir: Option<PathBuf>,
    pub home: Option<PathBuf>,
}

impl HomeLookup {
    /// Read `GROOVY_HOME`, `GVM_DIR` and `HOME` (or the platform home directory).
    pub fn from_env() -> Self {
        Self {
            groovy_home: non_empty(std::env::var_os("GROOVY_HOME")),
            gvm_dir: non_empty(std::env::var_os("GVM_DIR")),
            home: non_empty(std::env::var_os("HOME")).or_else(dirs::home_dir),
        }
    }

    /// Pick the installation root.
    ///
    /// Order: `explicit`, `$GROOVY_HOME`, `$GVM_DIR/groovy/current`,
    /// `$HOME/.gvm/groovy/current`.
    pub fn resolve(&self, explicit: Option<PathBuf>) -> Result<NormalizedPath> {
        let root = explicit
            .or_else(|| self.groovy_home.clone())
            .or_else(|| self.gvm_dir.as_ref().map(|gvm| gvm.join("groovy/current")))
            .or_else(|| self.home.as_ref().map(|home| home.join(".gvm/groovy/current")))
            .ok_or(CliError::NoGroovyHome)?;

        Ok(NormalizedPath::new(dunce::simplified(&root)))
    }
}

fn non_empty(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Name used to prefix error messages.
pub fn program_name() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.file_stem().map(|stem| stem.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "indynize".to_string())
}
