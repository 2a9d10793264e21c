use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::Result;

impl Repository {
    /// Create `name` at the commit HEAD resolves to (unborn if none)
    pub fn create_branch(&mut self, name: &str) -> Result<BranchName> {
        let name = BranchName::try_parse(name)?;

        let _lock = self.lock()?;
        let target = self.refs().resolve_head()?;
        self.refs().create_branch(&name, target.as_ref())?;

        Ok(name)
    }

    /// Every branch, sorted by name, with the checked-out one flagged
    pub fn list_branches(&self) -> Result<Vec<(BranchName, bool)>> {
        self.refs().list_branches()
    }
}
