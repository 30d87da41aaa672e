mod error;
mod harvest;

pub use error::Error;
pub use harvest::*;

use std::path::PathBuf;

/// A task to save downloaded bytes into `root_dir/subdir/filename`.
#[derive(Debug, Clone)]
pub struct SaveTask {
    pub root_dir: PathBuf,
    pub subdir: PathBuf,
    pub filename: PathBuf,
}

/// Local image means an image already written to disk.
/// NOTE: `relpath` is relative to the root directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalImage {
    pub filename: String,
    pub relpath: String,
    pub size: u64,
}
