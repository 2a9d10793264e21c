//! Repository operations
//!
//! - `plumbing`: direct object access (hash-object, cat-file)
//! - `porcelain`: version control workflows (add, commit, branch, checkout, ...)

pub mod plumbing;
pub mod porcelain;
