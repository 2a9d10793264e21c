use crate::errors::{Error, Result};
use file_guard::{FileGuard, Lock};
use std::fs::File;
use std::path::Path;

/// Exclusive advisory lock over the whole repository
///
/// Held for the duration of a mutating operation and released on drop.
/// Readers do not take it: every file they read is replaced by rename, so
/// they always observe either the old or the new content.
#[derive(Debug)]
pub struct RepositoryLock {
    _guard: FileGuard<Box<File>>,
}

impl RepositoryLock {
    /// Block until the lock file at `path` can be locked exclusively
    pub fn acquire(path: &Path) -> Result<Self> {
        let file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(Error::io(path))?;

        let guard = file_guard::lock(Box::new(file), Lock::Exclusive, 0, 1).map_err(Error::io(path))?;
        tracing::trace!(path = %path.display(), "acquired repository lock");

        Ok(RepositoryLock { _guard: guard })
    }
}
