//! trashsweep - find files by extension and send them to the trash.
//!
//! The binary is a thin interactive wrapper: it scans one or more directories
//! for files matching a filename extension, shows what it found, and after a
//! yes/no confirmation moves each match to the operating system's trash.
//!
//! The library underneath is usable on its own:
//! - [`scanner`] enumerates files and directories with shell-glob semantics
//! - [`classify`] answers whether a directory is a leaf or empty
//! - [`coerce`] turns numeric-looking strings into numbers

pub mod classify;
pub mod coerce;
pub mod scanner;

// Re-export commonly used items
pub use classify::{is_empty_dir, is_leaf_dir};
pub use coerce::{to_num, Coerced};
pub use scanner::{scan_dirs, scan_files, scan_items, ScanError};
