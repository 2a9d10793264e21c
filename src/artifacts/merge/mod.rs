//! Fast-forward merges
//!
//! History is a set of single-parent chains, so a merge is only possible when
//! the current tip lies on the chain of the target tip. The branch is then
//! simply moved forward; no merge commit is ever created.

pub mod ancestry;

use crate::artifacts::objects::object_id::ObjectId;

/// Successful outcome of a merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The current branch (or detached HEAD) was moved from `from` to `to`
    FastForward { from: Option<ObjectId>, to: ObjectId },
    /// Nothing to do: the target is already contained in the current history
    UpToDate,
}
