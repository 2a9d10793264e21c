use crate::areas::repository::Repository;
use crate::artifacts::checkout::snapshot::flatten_tree;
use crate::artifacts::objects::object::Object;
use crate::artifacts::status::status_info::StatusInfo;
use crate::errors::Result;

impl Repository {
    /// Compare HEAD, the index and the working tree
    pub fn status(&mut self) -> Result<StatusInfo> {
        self.index_mut().rehydrate()?;

        let head = self.refs().read_head_target()?;
        let head_commit = self.refs().resolve_head()?;
        let head_tree = match &head_commit {
            Some(oid) => {
                let commit = self.database().parse_object_as_commit(oid)?;
                flatten_tree(self.database(), commit.tree_oid())?
            }
            None => Vec::new(),
        };
        let snapshot = self.index().snapshot();
        let workspace_files = self.workspace().list_files()?;

        StatusInfo::compute(
            head,
            head_commit,
            &head_tree,
            &snapshot,
            &workspace_files,
            |path| Ok(self.workspace().parse_blob(path)?.object_id()),
        )
    }
}
