use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head_target::HeadTarget;
use crate::artifacts::checkout::snapshot::Snapshot;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};

impl Repository {
    /// Check out a branch by name, or else a commit id (full or abbreviated),
    /// which detaches HEAD
    pub fn checkout(&mut self, target: &str) -> Result<HeadTarget> {
        if let Ok(name) = BranchName::try_parse(target)
            && self.refs().branch_exists(&name)
        {
            return self.checkout_branch(name.as_ref());
        }

        let _lock = self.lock()?;
        let oid = match self.database().resolve(target) {
            Ok(oid) => oid,
            Err(Error::RefNotFound { .. }) => return Err(Error::BranchNotFound(target.to_string())),
            Err(e) => return Err(e),
        };

        let snapshot = self.load_commit_snapshot(&oid)?;
        let head = HeadTarget::Detached(oid);
        self.refs().set_head(&head)?;
        self.materialize(&snapshot)?;

        Ok(head)
    }

    /// Point HEAD at `name` and replace the working tree with its tip
    ///
    /// An unborn branch only moves HEAD; the working tree and the index are
    /// left as they are.
    pub fn checkout_branch(&mut self, name: &str) -> Result<HeadTarget> {
        let name = BranchName::try_parse(name)?;

        let _lock = self.lock()?;
        let tip = self.refs().read_branch(&name)?;
        let snapshot = tip
            .as_ref()
            .map(|oid| self.load_commit_snapshot(oid))
            .transpose()?;

        let head = HeadTarget::Symbolic(name);
        self.refs().set_head(&head)?;
        if let Some(snapshot) = snapshot {
            self.materialize(&snapshot)?;
        }

        Ok(head)
    }

    /// Load every file of the commit's tree before anything is modified
    pub(crate) fn load_commit_snapshot(&self, oid: &ObjectId) -> Result<Snapshot> {
        let commit = self.database().parse_object_as_commit(oid)?;
        Snapshot::load(self.database(), commit.tree_oid())
    }

    /// Make the working tree and the index match `snapshot`
    pub(crate) fn materialize(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.workspace().reconcile(snapshot)?;
        self.index_mut().replace_all(snapshot.entries().to_vec())
    }
}
