//! Glob-based enumeration of files and directories.
//!
//! Extension tokens are given WITHOUT a leading period ("csv", not ".csv");
//! each token is matched by the shell glob `*.token`, so this is a suffix
//! match, not extension parsing: `archive.tar.gz` matches the token `gz`.

use glob::Pattern;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced by the scanner and the directory classifier.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The target path does not exist.
    #[error("path does not exist: {0}")]
    NotFound(PathBuf),

    /// The target path exists but is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The directory exists but cannot be read.
    #[error("cannot access directory {path}: {source}")]
    PermissionDenied { path: PathBuf, source: io::Error },

    /// A glob pattern failed to compile.
    #[error("invalid glob pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    /// Any other OS error while reading a directory.
    #[error("error reading {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

/// Scan a directory for entries whose names match `*.extension`.
///
/// Results are concatenated per extension token in the given order, so
/// overlapping tokens can produce duplicates; nothing is deduplicated.
/// Non-recursive scans match immediate children only; recursive scans match
/// at any depth via `**/*.extension`.
///
/// Fails with [`ScanError::NotFound`] if `root` does not exist, rather than
/// returning an empty list.
///
/// # Example
///
/// ```no_run
/// let csvs = trashsweep::scan_files("./data/raw", &["csv"], false)?;
/// # Ok::<(), trashsweep::ScanError>(())
/// ```
pub fn scan_files<P, S>(root: P, extensions: &[S], recursive: bool) -> Result<Vec<PathBuf>, ScanError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let root = root.as_ref();
    ensure_dir(root)?;

    let mut paths = Vec::new();
    for extension in extensions {
        let tail = if recursive {
            format!("**/*.{}", extension.as_ref())
        } else {
            format!("*.{}", extension.as_ref())
        };
        paths.extend(glob_under(root, &tail)?);
    }

    Ok(paths)
}

/// Scan for subdirectories of `root`, never including `root` itself.
pub fn scan_dirs<P: AsRef<Path>>(root: P, recursive: bool) -> Result<Vec<PathBuf>, ScanError> {
    let root = root.as_ref();
    ensure_dir(root)?;

    let tail = if recursive { "**" } else { "*" };
    let dirs = glob_under(root, tail)?
        .filter(|path| path.is_dir() && path.as_path() != root)
        .collect();

    Ok(dirs)
}

/// Scan for both directories and files under `root`: all subdirectories
/// first, then the files matching `extensions` (see [`scan_files`]).
pub fn scan_items<P, S>(root: P, extensions: &[S], recursive: bool) -> Result<Vec<PathBuf>, ScanError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let root = root.as_ref();
    let mut items = scan_dirs(root, recursive)?;
    items.extend(scan_files(root, extensions, recursive)?);
    Ok(items)
}

/// Run a glob pattern rooted at `root`, escaping any glob metacharacters in
/// the root path itself. Entries that cannot be read during matching are
/// skipped, as shell globbing would.
fn glob_under(root: &Path, tail: &str) -> Result<impl Iterator<Item = PathBuf>, ScanError> {
    let pattern = format!("{}/{}", Pattern::escape(&root.to_string_lossy()), tail);
    let entries = glob::glob(&pattern).map_err(|source| ScanError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;
    Ok(entries.filter_map(Result::ok))
}

/// Reject roots that are missing or are not directories before globbing,
/// so the caller gets a named error instead of an empty result.
pub(crate) fn ensure_dir(path: &Path) -> Result<(), ScanError> {
    if !path.exists() {
        return Err(ScanError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(ScanError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}
