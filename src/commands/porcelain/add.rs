use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::{IndexEntry, normalize};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use std::path::{Path, PathBuf};

impl Repository {
    /// Stage files and directories given relative to `cwd` (or absolute)
    ///
    /// Every path is resolved before anything is stored, so an invalid path
    /// stages nothing. Returns the appended records.
    pub fn add(&mut self, cwd: &Path, paths: &[PathBuf]) -> Result<Vec<IndexEntry>> {
        let _lock = self.lock()?;
        self.index_mut().rehydrate()?;

        let files = paths
            .iter()
            .map(|path| self.workspace().expand(cwd, path))
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        let mut staged = Vec::with_capacity(files.len());
        for file in files {
            let blob = self.workspace().parse_blob(&file)?;
            let oid = self.database().store(&blob)?;

            let entry = IndexEntry::new(file, oid);
            self.index_mut().stage(entry.clone())?;
            staged.push(entry);
        }

        Ok(staged)
    }

    /// Record that `path` should hold the already stored blob `oid`
    pub fn stage_entry(&mut self, path: &Path, oid: ObjectId) -> Result<()> {
        let name = normalize(path).ok_or_else(|| Error::InvalidPath(path.to_path_buf()))?;
        self.database().parse_object_as_blob(&oid)?;

        let _lock = self.lock()?;
        self.index_mut().rehydrate()?;
        self.index_mut().stage(IndexEntry::new(name, oid))
    }
}
