use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::core::layout;
use crate::artifacts::core::lock::RepositoryLock;
use crate::errors::{Error, Result};
use std::path::{Path, PathBuf};

/// Explicit handle on one repository
///
/// Every operation goes through a `Repository`; nothing is derived from the
/// process working directory once the handle exists.
#[derive(Debug)]
pub struct Repository {
    /// Canonical path of the working tree root
    path: Box<Path>,
    index: Index,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Open the repository rooted at `path`
    pub fn open(path: &Path) -> Result<Self> {
        let path = path.canonicalize().map_err(Error::io(path))?;

        if !layout::metadata_path(&path).is_dir() {
            return Err(Error::NotARepository(path));
        }

        Ok(Self::at(path))
    }

    /// Open the repository containing `start`
    pub fn discover(start: &Path) -> Result<Self> {
        let root = find_repository_root(start)?;
        Ok(Self::at(root))
    }

    pub(crate) fn at(path: PathBuf) -> Self {
        Repository {
            index: Index::new(layout::index_path(&path).into_boxed_path()),
            database: Database::new(layout::objects_path(&path).into_boxed_path()),
            workspace: Workspace::new(path.clone().into_boxed_path()),
            refs: Refs::new(layout::metadata_path(&path).into_boxed_path()),
            path: path.into_boxed_path(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata_path(&self) -> PathBuf {
        layout::metadata_path(&self.path)
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut Index {
        &mut self.index
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// Take the repository-wide lock; released when the guard is dropped
    pub fn lock(&self) -> Result<RepositoryLock> {
        RepositoryLock::acquire(&layout::lock_path(&self.path))
    }
}

/// Walk up from `start` to the first directory holding a metadata directory
pub fn find_repository_root(start: &Path) -> Result<PathBuf> {
    let start = start.canonicalize().map_err(Error::io(start))?;

    start
        .ancestors()
        .find(|candidate| layout::metadata_path(candidate).is_dir())
        .map(Path::to_path_buf)
        .ok_or(Error::NotARepository(start.clone()))
}
