use crate::areas::repository::Repository;
use crate::artifacts::checkout::snapshot::flatten_tree;
use crate::artifacts::objects::commit::{Author, Commit};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::{Tree, TreeBuilder};
use crate::errors::Result;

/// What `commit` created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    pub oid: ObjectId,
    pub is_root: bool,
    pub short_message: String,
}

impl Repository {
    /// Snapshot the index into a new commit on top of HEAD
    ///
    /// Trees are stored children first, then the commit, then HEAD (or the
    /// branch it names) is advanced. The index is then rewritten from the
    /// stored tree, so it lists exactly the committed file set.
    pub fn commit(&mut self, message: &str, author: Author) -> Result<CommitSummary> {
        let _lock = self.lock()?;
        self.index_mut().rehydrate()?;

        let snapshot = self.index().snapshot();
        let builder = TreeBuilder::build(&snapshot);
        let tree_oid = builder.write(&mut |tree: &Tree| self.database().store(tree))?;

        let committed = flatten_tree(self.database(), &tree_oid)?;

        let parent = self.refs().resolve_head()?;
        let is_root = parent.is_none();

        let commit = Commit::new(
            parent,
            tree_oid,
            author.clone(),
            author,
            message.to_string(),
        );
        let oid = self.database().store(&commit)?;
        self.refs().update_head(&oid)?;
        tracing::info!(oid = %oid, root = is_root, "created commit");

        self.index_mut().replace_all(committed)?;

        Ok(CommitSummary {
            oid,
            is_root,
            short_message: commit.short_message(),
        })
    }
}
