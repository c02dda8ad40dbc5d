//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "zelect";
const APPLICATION: &str = "zelect-demo";

/// Fallback log location when no home directory can be determined.
const LOCAL_LOG: &str = "zelect-demo.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for temporary/regenerable data.
///
/// - Linux: `$XDG_CACHE_HOME/zelect-demo` or `~/.cache/zelect-demo`
/// - macOS: `~/Library/Caches/dev.zelect.zelect-demo`
/// - Windows: `C:\Users\<User>\AppData\Local\zelect\zelect-demo\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path of the log file, creating its directory when needed.
pub fn log_file() -> PathBuf {
    cache_dir()
        .filter(|dir| fs::create_dir_all(dir).is_ok())
        .map(|dir| dir.join("latest.log"))
        .unwrap_or_else(|| PathBuf::from(LOCAL_LOG))
}
