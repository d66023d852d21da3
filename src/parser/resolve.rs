//! Request target to filesystem path mapping.

use std::fmt;
use std::path::{Path, PathBuf};

/// Resource served for the root target `/`.
pub const DEFAULT_INDEX_FILE: &str = "index.html";

/// A request target with the root substituted and its leading character
/// removed.
///
/// No normalization beyond that happens: `..` segments and absolute paths
/// (from targets such as `//etc/hosts`) pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath(String);

impl ResolvedPath {
    /// The resolved path as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The path to open, relative to `root`.
    pub fn to_path_in(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve a request target.
///
/// `/` becomes `/<index_file>`, then exactly the first character is
/// stripped. The first character is assumed to be `/` and is dropped even
/// when it is not.
pub fn resolve_path(target: &str, index_file: &str) -> ResolvedPath {
    let target = if target == "/" {
        format!("/{index_file}")
    } else {
        target.to_string()
    };

    let mut chars = target.chars();
    chars.next();
    ResolvedPath(chars.as_str().to_string())
}
