//! [`TestGroovyHome`] builder for on-disk reconciliation scenarios.
//!
//! Every fixture file holds the relative path it was created at, so reading a
//! file in `lib` tells which source it was linked from on any platform.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// State of one entry in a [`TestGroovyHome::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryState {
    Dir,
    /// File contents and, on unix, its inode number
    File { content: String, ino: u64 },
}

/// A temporary Groovy installation.
///
/// # Example
///
/// ```rust,no_run
/// use indy_test_utils::TestGroovyHome;
///
/// let home = TestGroovyHome::new()
///     .with_lib(&["groovy.jar", "antlr.jar"])
///     .with_indy(&["groovy-indy.jar"]);
/// home.assert_exists("lib/groovy.jar");
/// ```
pub struct TestGroovyHome {
    temp_dir: TempDir,
}

impl Default for TestGroovyHome {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGroovyHome {
    /// Create an empty installation root.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Populate `lib` with the given jar names.
    pub fn with_lib(self, names: &[&str]) -> Self {
        self.with_files("lib", names)
    }

    /// Populate `indy` with the given jar names.
    pub fn with_indy(self, names: &[&str]) -> Self {
        self.with_files("indy", names)
    }

    pub fn with_files(self, dir: &str, names: &[&str]) -> Self {
        fs::create_dir_all(self.root().join(dir)).unwrap();
        for name in names {
            self.write(&format!("{}/{}", dir, name));
        }
        self
    }

    /// Write a file whose content is `rel`, creating parents.
    pub fn write(&self, rel: &str) {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, rel).unwrap();
    }

    /// Content of the file at `rel`.
    pub fn read(&self, rel: &str) -> String {
        let path = self.root().join(rel);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Sorted names inside `rel_dir`.
    pub fn entries(&self, rel_dir: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.root().join(rel_dir))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Every entry under the root keyed by forward-slash relative path.
    pub fn snapshot(&self) -> BTreeMap<String, EntryState> {
        let mut out = BTreeMap::new();
        collect(self.root(), "", &mut out);
        out
    }

    /// Assert that `lib/<name>` is a hard link to the file at `source`.
    ///
    /// # Panics
    /// Panics if the contents differ, or on unix if the inodes differ.
    pub fn assert_linked(&self, name: &str, source: &str) {
        let lib_rel = format!("lib/{}", name);
        assert_eq!(
            self.read(&lib_rel),
            self.read(source),
            "{} should be linked to {}",
            lib_rel,
            source
        );
        assert_eq!(
            ino(&self.root().join(&lib_rel)),
            ino(&self.root().join(source)),
            "{} and {} should share an inode",
            lib_rel,
            source
        );
    }

    /// Assert that `rel` exists.
    pub fn assert_exists(&self, rel: &str) {
        let full_path = self.root().join(rel);
        assert!(
            full_path.exists(),
            "Expected path to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `rel` does **not** exist.
    pub fn assert_not_exists(&self, rel: &str) {
        let full_path = self.root().join(rel);
        assert!(
            !full_path.exists(),
            "Expected path NOT to exist: {}",
            full_path.display()
        );
    }
}

fn collect(dir: &Path, prefix: &str, out: &mut BTreeMap<String, EntryState>) {
    for entry in fs::read_dir(dir).unwrap() {
        let entry = entry.unwrap();
        let name = entry.file_name().to_string_lossy().into_owned();
        let rel = if prefix.is_empty() {
            name
        } else {
            format!("{}/{}", prefix, name)
        };
        let path = entry.path();
        if path.is_dir() {
            out.insert(rel.clone(), EntryState::Dir);
            collect(&path, &rel, out);
        } else {
            let content = fs::read_to_string(&path).unwrap_or_default();
            out.insert(
                rel,
                EntryState::File {
                    content,
                    ino: ino(&path),
                },
            );
        }
    }
}

#[cfg(unix)]
fn ino(path: &Path) -> u64 {
    use std::os::unix::fs::MetadataExt;
    fs::metadata(path).unwrap().ino()
}

#[cfg(not(unix))]
fn ino(_path: &Path) -> u64 {
    0
}
