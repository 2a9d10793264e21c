use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;

impl Repository {
    /// Lazy history from `tip` following parent links
    pub fn log(
        &self,
        tip: Option<ObjectId>,
    ) -> RevList<impl FnMut(&ObjectId) -> Result<Commit> + '_> {
        RevList::new(tip, move |oid: &ObjectId| {
            self.database().parse_object_as_commit(oid)
        })
    }

    /// Commit HEAD resolves to; `None` on an unborn branch
    pub fn resolve_head(&self) -> Result<Option<ObjectId>> {
        self.refs().resolve_head()
    }
}
