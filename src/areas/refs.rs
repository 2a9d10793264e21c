//! References (HEAD and branches)
//!
//! HEAD either names a branch (`ref: refs/heads/<name>`) or holds a commit id
//! directly (detached). A branch file holds the id of its tip commit, or is
//! empty while the branch has no commits yet (unborn).
//!
//! ## Writes
//!
//! Every ref write replaces the whole file through a temporary file and a
//! rename. Read-modify-write sequences are protected by the repository lock,
//! which the caller holds.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head_target::HeadTarget;
use crate::artifacts::core::atomic_file::write_atomically;
use crate::artifacts::core::layout::{HEAD, HEADS_DIR, REFS_DIR};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use derive_new::new;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD)
    }

    pub fn heads_path(&self) -> PathBuf {
        self.path.join(REFS_DIR).join(HEADS_DIR)
    }

    fn branch_path(&self, name: &BranchName) -> PathBuf {
        self.heads_path().join(name.as_ref_path())
    }

    pub fn read_head_target(&self) -> Result<HeadTarget> {
        let head_path = self.head_path();
        let content = std::fs::read_to_string(&head_path).map_err(|e| Error::RefNotFound {
            name: HEAD.to_string(),
            reason: e.to_string(),
        })?;

        HeadTarget::parse(&content).map_err(|reason| Error::RefNotFound {
            name: HEAD.to_string(),
            reason,
        })
    }

    /// Commit HEAD currently resolves to
    ///
    /// `None` when HEAD names a branch without commits, including a branch
    /// whose file does not exist yet.
    pub fn resolve_head(&self) -> Result<Option<ObjectId>> {
        match self.read_head_target()? {
            HeadTarget::Detached(oid) => Ok(Some(oid)),
            HeadTarget::Symbolic(name) => match self.read_branch(&name) {
                Err(Error::BranchNotFound(_)) => Ok(None),
                other => other,
            },
        }
    }

    /// Branch HEAD points at, `None` when detached
    pub fn current_branch(&self) -> Result<Option<BranchName>> {
        Ok(self.read_head_target()?.branch().cloned())
    }

    pub fn branch_exists(&self, name: &BranchName) -> bool {
        self.branch_path(name).is_file()
    }

    /// Tip of `name`; `None` for an unborn branch
    pub fn read_branch(&self, name: &BranchName) -> Result<Option<ObjectId>> {
        let branch_path = self.branch_path(name);

        let content = match std::fs::read_to_string(&branch_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::BranchNotFound(name.to_string()));
            }
            Err(e) => return Err(Error::io(&branch_path)(e)),
        };
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        ObjectId::try_parse(content)
            .map(Some)
            .map_err(|e| Error::RefNotFound {
                name: name.to_string(),
                reason: e.to_string(),
            })
    }

    /// Create a branch file pointing at `target` (empty for unborn)
    pub fn create_branch(&self, name: &BranchName, target: Option<&ObjectId>) -> Result<()> {
        if self.branch_exists(name) {
            return Err(Error::BranchAlreadyExists(name.to_string()));
        }

        self.write_branch(name, target)?;
        tracing::info!(branch = %name, target = ?target.map(ObjectId::to_string), "created branch");

        Ok(())
    }

    pub fn set_branch_target(&self, name: &BranchName, target: &ObjectId) -> Result<()> {
        self.write_branch(name, Some(target))?;
        tracing::debug!(branch = %name, target = %target, "updated branch");

        Ok(())
    }

    fn write_branch(&self, name: &BranchName, target: Option<&ObjectId>) -> Result<()> {
        let content = target.map(|oid| format!("{oid}\n")).unwrap_or_default();
        write_atomically(&self.branch_path(name), content.as_bytes())
    }

    pub fn set_head(&self, target: &HeadTarget) -> Result<()> {
        write_atomically(&self.head_path(), target.to_raw().as_bytes())?;
        tracing::debug!(head = ?target, "updated HEAD");

        Ok(())
    }

    /// Move whatever HEAD designates to `oid`
    ///
    /// Advances the current branch, or HEAD itself when detached.
    pub fn update_head(&self, oid: &ObjectId) -> Result<()> {
        match self.read_head_target()? {
            HeadTarget::Symbolic(name) => self.set_branch_target(&name, oid),
            HeadTarget::Detached(_) => self.set_head(&HeadTarget::Detached(oid.clone())),
        }
    }

    /// Every branch, sorted by name, flagged when it is checked out
    pub fn list_branches(&self) -> Result<Vec<(BranchName, bool)>> {
        let current = self.current_branch()?;
        let heads_path = self.heads_path();

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                let segments = relative_path
                    .components()
                    .map(|component| component.as_os_str().to_str())
                    .collect::<Option<Vec<_>>>()?;
                BranchName::try_parse(segments.join("/")).ok()
            })
            .map(|name| {
                let is_current = current.as_ref() == Some(&name);
                (name, is_current)
            })
            .collect::<Vec<_>>();

        branches.sort();
        Ok(branches)
    }
}
