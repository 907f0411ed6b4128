//! Indy jar naming
//!
//! Names are matched on their raw encoded bytes so jars whose names are not
//! valid UTF-8 are handled like any other.

use std::ffi::{OsStr, OsString};

use regex::bytes::Regex;
use std::sync::LazyLock;

static INDY_JAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s-u)^(?P<stem>.*)-indy\.jar$").unwrap());

/// Stem of an indy jar name, e.g. `groovy` for `groovy-indy.jar`.
pub fn indy_stem(name: &OsStr) -> Option<OsString> {
    let caps = INDY_JAR_PATTERN.captures(name.as_encoded_bytes())?;
    let stem = caps.name("stem")?;
    os_string_from(stem.as_bytes())
}

/// Name an indy jar takes inside `lib`.
pub fn linked_name(stem: &OsStr) -> OsString {
    let mut name = stem.to_os_string();
    name.push(".jar");
    name
}

#[cfg(unix)]
fn os_string_from(bytes: &[u8]) -> Option<OsString> {
    use std::os::unix::ffi::OsStrExt;
    Some(OsStr::from_bytes(bytes).to_os_string())
}

// Encoded bytes are only portable as UTF-8 off unix
#[cfg(not(unix))]
fn os_string_from(bytes: &[u8]) -> Option<OsString> {
    std::str::from_utf8(bytes).ok().map(OsString::from)
}
