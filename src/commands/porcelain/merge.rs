use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::merge::MergeOutcome;
use crate::artifacts::merge::ancestry;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};

impl Repository {
    /// Fast-forward the current branch (or detached HEAD) to `branch`
    ///
    /// Fails with [`Error::NonFastForward`] when the current tip is not on
    /// the target's history, or when the target has no commits while the
    /// current branch does; nothing is modified in that case.
    pub fn merge(&mut self, branch: &str) -> Result<MergeOutcome> {
        let name = BranchName::try_parse(branch)?;

        let _lock = self.lock()?;
        let target = self.refs().read_branch(&name)?;
        let current = self.refs().resolve_head()?;

        let target = match (&current, target) {
            (_, Some(target)) => target,
            (None, None) => {
                tracing::info!(branch = %name, "merge target and current branch have no commits");
                return Ok(MergeOutcome::UpToDate);
            }
            (Some(current), None) => {
                tracing::warn!(current = %current, branch = %name, "refusing to merge an unborn branch");
                return Err(Error::NonFastForward {
                    current: current.clone(),
                    target: None,
                });
            }
        };

        if let Some(current) = &current {
            if current == &target {
                return Ok(MergeOutcome::UpToDate);
            }
            if !self.is_ancestor(current, &target)? {
                tracing::warn!(current = %current, target = %target, "refusing non fast-forward merge");
                return Err(Error::NonFastForward {
                    current: current.clone(),
                    target: Some(target),
                });
            }
        }

        let snapshot = self.load_commit_snapshot(&target)?;
        self.refs().update_head(&target)?;
        self.materialize(&snapshot)?;
        tracing::info!(from = ?current.as_ref().map(ObjectId::to_string), to = %target, "fast-forward");

        Ok(MergeOutcome::FastForward {
            from: current,
            to: target,
        })
    }

    /// Whether `candidate` is `tip` or one of its ancestors
    pub fn is_ancestor(&self, candidate: &ObjectId, tip: &ObjectId) -> Result<bool> {
        ancestry::is_ancestor(candidate, tip, |oid| {
            self.database().parse_object_as_commit(oid)
        })
    }
}
