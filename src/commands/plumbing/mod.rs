//! Plumbing commands (low-level object access)
//!
//! - `hash-object`: Compute a blob id and optionally store the blob
//! - `cat-file`: Decode a stored object

pub mod cat_file;
pub mod hash_object;
