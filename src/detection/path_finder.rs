//! Executable lookup: explicit path, then PATH, then common install dirs.

use std::path::{Path, PathBuf};

/// System directories checked when PATH lookup fails.
const FALLBACK_DIRS: &[&str] = &["/usr/local/bin", "/usr/bin"];

/// Directories under `$HOME` where npm prefixes and user installs land.
const HOME_DIRS: &[&str] = &[".local/bin", "bin", ".npm-global/bin"];

/// Locate the CLI executable.
///
/// An explicit path is authoritative: if it is set and missing, the CLI
/// is reported as not found rather than searched for elsewhere.
pub(crate) fn find_executable(name: &str, explicit: Option<&Path>) -> Option<PathBuf> {
    // Configured path wins, even when it does not exist
    if let Some(path) = explicit {
        return path.exists().then(|| path.to_path_buf());
    }

    // Primary: PATH lookup via which crate
    if let Ok(path) = which::which(name) {
        return Some(path);
    }

    // Fallback: system dirs, then per-user dirs (GUI launches often
    // inherit a PATH without npm's global bin)
    let system = FALLBACK_DIRS.iter().map(PathBuf::from);
    let home = std::env::var_os("HOME")
        .map(PathBuf::from)
        .into_iter()
        .flat_map(|home| HOME_DIRS.iter().map(move |dir| home.join(dir)));

    system
        .chain(home)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.exists())
}
