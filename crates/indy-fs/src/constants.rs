//! Directory names inside a Groovy installation.

use std::path::Path;

/// Well-known directories under the Groovy installation root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroovyPath {
    /// The `lib` directory consumed by the Groovy runtime
    Lib,
    /// The `lib.orig` directory holding the pristine jars
    LibOrig,
    /// The `indy` directory holding `<stem>-indy.jar` variants
    Indy,
}

impl GroovyPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lib => "lib",
            Self::LibOrig => "lib.orig",
            Self::Indy => "indy",
        }
    }
}

impl AsRef<Path> for GroovyPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl std::fmt::Display for GroovyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
