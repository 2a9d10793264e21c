//! On-disk layout of the metadata directory
//!
//! ```text
//! <root>/.metadata/
//!   HEAD              "ref: refs/heads/<name>\n" or "<40-hex>\n"
//!   index             staged entries, one per line
//!   lock              advisory lock held by mutating operations
//!   objects/xx/yyyy   encoded objects, fan-out by the first two hex chars
//!   refs/heads/<name> branch tips
//! ```

use std::path::{Path, PathBuf};

pub const METADATA_DIR: &str = ".metadata";
pub const HEAD: &str = "HEAD";
pub const INDEX: &str = "index";
pub const LOCK: &str = "lock";
pub const OBJECTS_DIR: &str = "objects";
pub const REFS_DIR: &str = "refs";
pub const HEADS_DIR: &str = "heads";

/// Branch created by `init` and pointed at by a fresh HEAD
pub const DEFAULT_BRANCH: &str = "master";

/// Prefix of a symbolic HEAD
pub const SYMREF_PREFIX: &str = "ref: ";

pub fn metadata_path(root: &Path) -> PathBuf {
    root.join(METADATA_DIR)
}

pub fn objects_path(root: &Path) -> PathBuf {
    metadata_path(root).join(OBJECTS_DIR)
}

pub fn heads_path(root: &Path) -> PathBuf {
    metadata_path(root).join(REFS_DIR).join(HEADS_DIR)
}

pub fn index_path(root: &Path) -> PathBuf {
    metadata_path(root).join(INDEX)
}

pub fn head_path(root: &Path) -> PathBuf {
    metadata_path(root).join(HEAD)
}

pub fn lock_path(root: &Path) -> PathBuf {
    metadata_path(root).join(LOCK)
}
