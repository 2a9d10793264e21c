use crate::artifacts::branch::head_target::HeadTarget;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::{
    FileChange, FileChangeType, IndexChangeType, WorkspaceChangeType,
};
use crate::errors::Result;
use std::collections::{HashMap, HashSet};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Result of comparing HEAD, the index and the working tree
#[derive(Debug, Clone)]
pub struct StatusInfo {
    pub head: HeadTarget,
    /// `None` while the current branch has no commits
    pub head_commit: Option<ObjectId>,
    /// Index entries whose hash differs from HEAD, in staging order
    pub staged: Vec<FileChange>,
    /// Working tree files not staged, in file-walk order
    pub unstaged: Vec<FileChange>,
}

impl StatusInfo {
    /// Classify every path
    ///
    /// - staged: a snapshot entry absent from `head_tree` is `Added`, one with
    ///   a different hash is `Modified`
    /// - unstaged: a working tree file that is not staged is `Modified` when
    ///   HEAD has it with a different hash and `Untracked` when HEAD lacks it
    ///
    /// `hash_file` is only called for files HEAD tracks.
    pub fn compute<F>(
        head: HeadTarget,
        head_commit: Option<ObjectId>,
        head_tree: &[IndexEntry],
        snapshot: &[IndexEntry],
        workspace_files: &[PathBuf],
        mut hash_file: F,
    ) -> Result<Self>
    where
        F: FnMut(&Path) -> Result<ObjectId>,
    {
        let committed = head_tree
            .iter()
            .map(|entry| (&entry.name, &entry.oid))
            .collect::<HashMap<_, _>>();

        let staged = snapshot
            .iter()
            .filter_map(|entry| match committed.get(&entry.name) {
                None => Some(FileChange::new(
                    entry.name.clone(),
                    FileChangeType::Index(IndexChangeType::Added),
                )),
                Some(&oid) if oid != &entry.oid => Some(FileChange::new(
                    entry.name.clone(),
                    FileChangeType::Index(IndexChangeType::Modified),
                )),
                Some(_) => None,
            })
            .collect::<Vec<_>>();
        let staged_paths = staged
            .iter()
            .map(|change| &change.path)
            .collect::<HashSet<_>>();

        let mut unstaged = Vec::new();
        for path in workspace_files {
            if staged_paths.contains(path) {
                continue;
            }

            match committed.get(path) {
                None => unstaged.push(FileChange::new(
                    path.clone(),
                    FileChangeType::Workspace(WorkspaceChangeType::Untracked),
                )),
                Some(&oid) => {
                    if &hash_file(path.as_path())? != oid {
                        unstaged.push(FileChange::new(
                            path.clone(),
                            FileChangeType::Workspace(WorkspaceChangeType::Modified),
                        ));
                    }
                }
            }
        }

        Ok(StatusInfo {
            head,
            head_commit,
            staged,
            unstaged,
        })
    }

    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.unstaged.is_empty()
    }

    pub fn render(&self, writer: &mut impl Write) -> std::io::Result<()> {
        match &self.head {
            HeadTarget::Symbolic(name) => writeln!(writer, "On branch {name}")?,
            HeadTarget::Detached(oid) => {
                writeln!(writer, "HEAD detached at {}", oid.to_short_oid())?
            }
        }

        if !self.staged.is_empty() {
            writeln!(writer, "\nChanges to be committed:")?;
            for change in &self.staged {
                writeln!(writer, "{change}")?;
            }
        }

        let (modified, untracked): (Vec<_>, Vec<_>) =
            self.unstaged.iter().partition(|change| {
                change.change == FileChangeType::Workspace(WorkspaceChangeType::Modified)
            });

        if !modified.is_empty() {
            writeln!(writer, "\nChanges not staged for commit:")?;
            for change in modified {
                writeln!(writer, "{change}")?;
            }
        }

        if !untracked.is_empty() {
            writeln!(writer, "\nUntracked files:")?;
            for change in untracked {
                writeln!(writer, "{change}")?;
            }
        }

        if self.is_clean() {
            match self.head_commit {
                None => writeln!(writer, "\nNo commits yet")?,
                Some(_) => writeln!(writer, "\nnothing to commit, working tree clean")?,
            }
        }

        Ok(())
    }
}
