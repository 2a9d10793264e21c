use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head_target::HeadTarget;
use crate::artifacts::core::layout::{self, DEFAULT_BRANCH};
use crate::errors::{Error, Result};
use std::fs;
use std::path::Path;

impl Repository {
    /// Create (or reopen) a repository rooted at `path`
    ///
    /// Missing directories are created. An existing HEAD, branch, index or
    /// object is left untouched, so running it twice is harmless.
    pub fn init(path: &Path) -> Result<Self> {
        fs::create_dir_all(path).map_err(Error::io(path))?;
        let path = path.canonicalize().map_err(Error::io(path))?;
        let repository = Repository::at(path);

        let objects_path = layout::objects_path(repository.path());
        fs::create_dir_all(&objects_path).map_err(Error::io(&objects_path))?;
        let heads_path = repository.refs().heads_path();
        fs::create_dir_all(&heads_path).map_err(Error::io(&heads_path))?;

        let _lock = repository.lock()?;

        if !repository.refs().head_path().exists() {
            let default_branch = BranchName::try_parse(DEFAULT_BRANCH)?;
            if !repository.refs().branch_exists(&default_branch) {
                repository.refs().create_branch(&default_branch, None)?;
            }
            repository
                .refs()
                .set_head(&HeadTarget::Symbolic(default_branch))?;
        }

        let index_path = repository.index().path().to_path_buf();
        if !index_path.exists() {
            fs::write(&index_path, b"").map_err(Error::io(&index_path))?;
        }

        tracing::info!(path = %repository.path().display(), "initialized repository");
        Ok(repository)
    }
}
