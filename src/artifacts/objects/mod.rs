//! Object model
//!
//! All content is stored as immutable objects identified by the SHA-1 hash of
//! their encoded form. There are three kinds:
//!
//! - **Blob**: File content (raw bytes)
//! - **Tree**: Directory listing (modes, names, and object IDs)
//! - **Commit**: Snapshot with metadata (tree, optional parent, identities, message)
//!
//! Every object is wrapped in the same envelope before hashing and storage:
//! `<type> <size>\0<payload>`

pub mod blob;
pub mod commit;
pub mod entry_mode;
pub mod envelope;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Shortest prefix accepted when resolving abbreviated ids
pub const MIN_PREFIX_LENGTH: usize = 4;
