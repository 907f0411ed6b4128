//! Normalized path handling for the installation root

use std::path::{Path, PathBuf};

/// A lexically cleaned path using forward slashes internally.
///
/// Backslashes become forward slashes, repeated separators collapse, `.`
/// components are dropped and `..` consumes the preceding component where
/// one exists. Platform-native form is produced only at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy().replace('\\', "/");
        Self { inner: clean(&raw) }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }
}

fn clean(raw: &str) -> String {
    let (prefix, rest) = if raw.starts_with("//") && !raw.starts_with("///") {
        ("//", &raw[2..])
    } else if let Some(stripped) = raw.strip_prefix('/') {
        ("/", stripped)
    } else {
        ("", raw)
    };
    let rooted = !prefix.is_empty();

    let mut parts: Vec<&str> = Vec::new();
    for part in rest.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(last) if is_drive(last, parts.len()) => {}
                Some(last) if *last != ".." => {
                    parts.pop();
                }
                _ if rooted => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let body = parts.join("/");
    match (prefix, body.is_empty()) {
        ("", true) => ".".to_string(),
        (p, true) => p.to_string(),
        (p, false) => format!("{p}{body}"),
    }
}

// `C:` stays put when followed by `..`
fn is_drive(part: &str, depth: usize) -> bool {
    depth == 1 && part.len() == 2 && part.ends_with(':')
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_collapses_and_resolves() {
        assert_eq!(clean("a//b/./c"), "a/b/c");
        assert_eq!(clean("/opt/groovy/../groovy/lib"), "/opt/groovy/lib");
        assert_eq!(clean("../x"), "../x");
        assert_eq!(clean("/.."), "/");
        assert_eq!(clean(""), ".");
        assert_eq!(clean("C:/.."), "C:");
    }
}
