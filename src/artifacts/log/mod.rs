//! Commit history traversal
//!
//! - `rev_list`: lazy walk from a tip along parent links
//! - `format`: medium and oneline renderings used by `log`

pub mod format;
pub mod rev_list;
