//! Working tree access
//!
//! Every path handed out or accepted by [`Workspace`] is relative to the
//! repository root. The metadata directory is never listed, read or written.

use crate::artifacts::checkout::snapshot::Snapshot;
use crate::artifacts::core::layout::METADATA_DIR;
use crate::artifacts::index::index_entry::normalize;
use crate::artifacts::objects::blob::Blob;
use crate::errors::{Error, Result};
use bytes::Bytes;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_metadata_dir(&self, entry: &DirEntry) -> bool {
        entry.depth() == 1 && entry.file_name() == METADATA_DIR
    }

    /// Every regular file of the working tree, in file-walk (name) order
    pub fn list_files(&self) -> Result<Vec<PathBuf>> {
        self.list_files_under(&self.path)
    }

    fn list_files_under(&self, start: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(start)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| start != self.path.as_ref() || !self.is_metadata_dir(entry));

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(start).to_path_buf();
                Error::IoFailure {
                    path,
                    source: e.into(),
                }
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(self.path.as_ref())
                .map_err(|_| Error::InvalidPath(entry.path().to_path_buf()))?;
            if let Some(relative) = normalize(relative) {
                files.push(relative);
            }
        }

        Ok(files)
    }

    /// Expand a user-supplied path (absolute, or relative to `cwd`) into the
    /// repository-relative files it designates
    ///
    /// Directories expand to every file beneath them.
    pub fn expand(&self, cwd: &Path, path: &Path) -> Result<Vec<PathBuf>> {
        let absolute = cwd.join(path);
        let absolute = absolute.canonicalize().map_err(Error::io(&absolute))?;

        let relative = absolute
            .strip_prefix(self.path.as_ref())
            .map_err(|_| Error::InvalidPath(path.to_path_buf()))?;

        if absolute.is_dir() {
            if relative.starts_with(METADATA_DIR) {
                return Err(Error::InvalidPath(path.to_path_buf()));
            }
            return self.list_files_under(&absolute);
        }

        normalize(relative)
            .map(|relative| vec![relative])
            .ok_or_else(|| Error::InvalidPath(path.to_path_buf()))
    }

    pub fn read_file(&self, file_path: &Path) -> Result<Bytes> {
        let file_path = self.path.join(file_path);

        std::fs::read(&file_path)
            .map(Bytes::from)
            .map_err(Error::io(&file_path))
    }

    pub fn parse_blob(&self, file_path: &Path) -> Result<Blob> {
        Ok(Blob::new(self.read_file(file_path)?))
    }

    /// Replace the whole working tree with `snapshot`
    ///
    /// Everything except the metadata directory is removed first; the
    /// snapshot's files are then written, creating directories as needed.
    pub fn reconcile(&self, snapshot: &Snapshot) -> Result<()> {
        self.clear()?;

        for (path, blob) in snapshot.files() {
            self.write_file(path, blob.content())?;
        }

        tracing::info!(files = snapshot.len(), "working tree reconciled");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let entries = std::fs::read_dir(&self.path).map_err(Error::io(&self.path))?;

        for entry in entries {
            let entry = entry.map_err(Error::io(&self.path))?;
            if entry.file_name() == METADATA_DIR {
                continue;
            }

            let path = entry.path();
            let file_type = entry.file_type().map_err(Error::io(&path))?;
            let removed = match file_type.is_dir() {
                true => std::fs::remove_dir_all(&path),
                false => std::fs::remove_file(&path),
            };
            removed.map_err(Error::io(&path))?;
        }

        Ok(())
    }

    fn write_file(&self, relative: &Path, content: &[u8]) -> Result<()> {
        let file_path = self.path.join(relative);

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).map_err(Error::io(parent))?;
        }

        std::fs::write(&file_path, content).map_err(Error::io(&file_path))
    }
}
