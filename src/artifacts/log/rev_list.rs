//! Lazy history walk
//!
//! Every commit has at most one parent, so the history reachable from a tip
//! is a single chain. [`RevList`] yields that chain one commit at a time,
//! loading each commit only when it is requested.
//!
//! A chain that revisits a commit can only come from corrupt data; it is
//! reported as [`Error::CorruptHistory`] instead of looping forever.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use std::collections::HashSet;

pub struct RevList<F>
where
    F: FnMut(&ObjectId) -> Result<Commit>,
{
    load_commit: F,
    next_oid: Option<ObjectId>,
    visited: HashSet<ObjectId>,
    failed: bool,
}

impl<F> RevList<F>
where
    F: FnMut(&ObjectId) -> Result<Commit>,
{
    /// Walk from `tip`; a `None` tip (unborn branch) yields nothing
    pub fn new(tip: Option<ObjectId>, load_commit: F) -> Self {
        RevList {
            load_commit,
            next_oid: tip,
            visited: HashSet::new(),
            failed: false,
        }
    }
}

impl<F> Iterator for RevList<F>
where
    F: FnMut(&ObjectId) -> Result<Commit>,
{
    type Item = Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let oid = self.next_oid.take()?;

        if !self.visited.insert(oid.clone()) {
            self.failed = true;
            return Some(Err(Error::CorruptHistory(oid)));
        }

        match (self.load_commit)(&oid) {
            Ok(commit) => {
                self.next_oid = commit.parent().cloned();
                Some(Ok((oid, commit)))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
