use crate::areas::database::Database;
use crate::artifacts::index::index_entry::{IndexEntry, normalize};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use std::path::{Path, PathBuf};

/// Files of a tree, depth-first in entry order, with their content
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    files: Vec<(PathBuf, Blob)>,
    entries: Vec<IndexEntry>,
}

impl Snapshot {
    pub fn load(database: &Database, tree_oid: &ObjectId) -> Result<Self> {
        let entries = flatten_tree(database, tree_oid)?;
        let files = entries
            .iter()
            .map(|entry| Ok((entry.name.clone(), database.parse_object_as_blob(&entry.oid)?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Snapshot { files, entries })
    }

    pub fn files(&self) -> impl Iterator<Item = (&Path, &Blob)> {
        self.files.iter().map(|(path, blob)| (path.as_path(), blob))
    }

    /// The snapshot as index records
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Every file reachable from `tree_oid` as a (path, blob id) record
///
/// Paths that would land inside the metadata directory are refused.
pub fn flatten_tree(database: &Database, tree_oid: &ObjectId) -> Result<Vec<IndexEntry>> {
    let mut entries = Vec::new();
    collect(database, tree_oid, Path::new(""), &mut entries)?;
    Ok(entries)
}

fn collect(
    database: &Database,
    tree_oid: &ObjectId,
    prefix: &Path,
    entries: &mut Vec<IndexEntry>,
) -> Result<()> {
    let tree = database.parse_object_as_tree(tree_oid)?;

    for entry in tree.into_entries() {
        let path = prefix.join(&entry.name);

        if entry.mode.is_tree() {
            collect(database, &entry.oid, &path, entries)?;
        } else {
            let path = normalize(&path).ok_or(Error::InvalidPath(path))?;
            entries.push(IndexEntry::new(path, entry.oid));
        }
    }

    Ok(())
}
