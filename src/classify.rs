//! Leaf and empty directory checks.

use crate::scanner::{ensure_dir, ScanError};
use std::fs::{self, ReadDir};
use std::io;
use std::path::Path;

/// Check whether `path` is a leaf directory: one containing no
/// subdirectories. Files are permitted.
///
/// Fails with [`ScanError::NotFound`] if the path does not exist,
/// [`ScanError::NotADirectory`] if it is a file, and
/// [`ScanError::PermissionDenied`] if the directory cannot be read.
pub fn is_leaf_dir<P: AsRef<Path>>(path: P) -> Result<bool, ScanError> {
    let path = path.as_ref();
    ensure_dir(path)?;

    for entry in read_dir_checked(path)? {
        let entry = entry.map_err(|source| io_error(path, source))?;
        let file_type = entry
            .file_type()
            .map_err(|source| io_error(path, source))?;
        if file_type.is_dir() {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Check whether `path` is an empty directory: zero entries of any kind.
/// Same failure conditions as [`is_leaf_dir`].
pub fn is_empty_dir<P: AsRef<Path>>(path: P) -> Result<bool, ScanError> {
    let path = path.as_ref();
    ensure_dir(path)?;

    let mut entries = read_dir_checked(path)?;
    Ok(entries.next().is_none())
}

fn read_dir_checked(path: &Path) -> Result<ReadDir, ScanError> {
    fs::read_dir(path).map_err(|source| {
        if source.kind() == io::ErrorKind::PermissionDenied {
            ScanError::PermissionDenied {
                path: path.to_path_buf(),
                source,
            }
        } else {
            io_error(path, source)
        }
    })
}

fn io_error(path: &Path, source: io::Error) -> ScanError {
    ScanError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan_dirs;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_leaf_dir_with_files_only() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        assert!(is_leaf_dir(dir.path()).unwrap());
    }

    #[test]
    fn test_leaf_dir_false_with_subdirectory() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        assert!(!is_leaf_dir(dir.path()).unwrap());
    }

    #[test]
    fn test_empty_dir_true_when_empty() {
        let dir = tempdir().unwrap();
        assert!(is_empty_dir(dir.path()).unwrap());
        assert!(is_leaf_dir(dir.path()).unwrap());
    }

    #[test]
    fn test_empty_dir_false_with_any_entry() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        assert!(!is_empty_dir(dir.path()).unwrap());
    }

    #[test]
    fn test_missing_path_is_not_found() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(is_leaf_dir(&missing), Err(ScanError::NotFound(_))));
        assert!(matches!(is_empty_dir(&missing), Err(ScanError::NotFound(_))));
    }

    #[test]
    fn test_file_path_is_not_a_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "a").unwrap();
        assert!(matches!(is_leaf_dir(&file), Err(ScanError::NotADirectory(_))));
        assert!(matches!(is_empty_dir(&file), Err(ScanError::NotADirectory(_))));
    }

    // A hidden subdirectory makes the directory a non-leaf, and the
    // scanner's `*` glob agrees: both see dot-entries.
    #[test]
    fn test_leaf_dir_matches_scan_dirs_with_hidden_subdir() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".hdir")).unwrap();
        assert!(!is_leaf_dir(dir.path()).unwrap());
        assert_eq!(
            is_leaf_dir(dir.path()).unwrap(),
            scan_dirs(dir.path(), false).unwrap().is_empty()
        );
    }

    #[test]
    fn test_leaf_dir_matches_scan_dirs() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        assert_eq!(
            is_leaf_dir(dir.path()).unwrap(),
            scan_dirs(dir.path(), false).unwrap().is_empty()
        );

        fs::create_dir(dir.path().join("sub")).unwrap();
        assert_eq!(
            is_leaf_dir(dir.path()).unwrap(),
            scan_dirs(dir.path(), false).unwrap().is_empty()
        );
    }
}
