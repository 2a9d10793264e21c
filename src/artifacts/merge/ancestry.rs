use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;

/// Whether `candidate` is `tip` or lies on the parent chain of `tip`
pub fn is_ancestor<F>(candidate: &ObjectId, tip: &ObjectId, load_commit: F) -> Result<bool>
where
    F: FnMut(&ObjectId) -> Result<Commit>,
{
    for item in RevList::new(Some(tip.clone()), load_commit) {
        let (oid, _) = item?;
        if &oid == candidate {
            return Ok(true);
        }
    }

    Ok(false)
}
