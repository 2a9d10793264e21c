//! Working tree status
//!
//! Status compares three views of the repository: the tree of the HEAD
//! commit, the index snapshot, and the files of the working tree.
//!
//! ## Components
//!
//! - `file_change`: change kinds and their labels
//! - `status_info`: classification and rendering

pub mod file_change;
pub mod status_info;
