//! Index entry representation
//!
//! Each entry in the index associates a path, relative to the repository root,
//! with the id of the blob holding its staged content.
//!
//! ## Entry Format
//!
//! One line per entry: `<40-hex-hash> <relative-path>\n`. Paths always use
//! `/` as separator on disk, whatever the host platform. Everything after the
//! first space is the path, so paths may themselves contain spaces.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::core::layout::METADATA_DIR;
use derive_new::new;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    /// File path relative to repository root
    pub name: PathBuf,
    /// Hash of the staged blob
    pub oid: ObjectId,
}

impl IndexEntry {
    /// Path segments, root first
    pub fn segments(&self) -> Vec<&str> {
        self.name
            .components()
            .filter_map(|component| match component {
                Component::Normal(segment) => segment.to_str(),
                _ => None,
            })
            .collect()
    }

    /// `/`-separated form of the path
    pub fn display_name(&self) -> String {
        self.segments().join("/")
    }

    pub fn to_line(&self) -> String {
        format!("{} {}\n", self.oid, self.display_name())
    }

    /// Parse one index line (without its trailing newline)
    pub fn parse_line(line: &str) -> Result<Self, String> {
        let (oid, name) = line
            .split_once(' ')
            .ok_or_else(|| format!("expected '<hash> <path>', got '{line}'"))?;
        let oid = ObjectId::try_parse(oid).map_err(|e| e.to_string())?;
        let name = normalize(Path::new(name)).ok_or_else(|| format!("invalid path '{name}'"))?;

        Ok(Self::new(name, oid))
    }
}

/// Normalise a repository-relative path
///
/// Returns `None` for paths that cannot be tracked: empty paths, absolute
/// paths, paths escaping the root through `..`, non UTF-8 paths, paths with
/// a newline, and anything inside the metadata directory.
pub fn normalize(path: &Path) -> Option<PathBuf> {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => continue,
            Component::Normal(segment) => {
                let segment = segment.to_str()?;
                if segment.contains('\n') || segment.contains('\\') {
                    return None;
                }
                normalized.push(segment);
            }
            _ => return None,
        }
    }

    match normalized.components().next() {
        None => None,
        Some(Component::Normal(first)) if first == METADATA_DIR => None,
        Some(_) => Some(normalized),
    }
}
