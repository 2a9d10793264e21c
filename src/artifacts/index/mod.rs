//! Index (staging area) file format
//!
//! The index is a plain text file with one staged path per line:
//!
//! ```text
//! <40-hex-hash> <relative/path>\n
//! ```
//!
//! Lines are kept in staging order. The same path may appear more than
//! once; the last line for a path wins when a snapshot is taken.

pub mod index_entry;
