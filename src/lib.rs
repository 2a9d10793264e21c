//! A minimal version-control engine
//!
//! Content-addressed objects (blobs, trees, commits) stored under
//! `.metadata/objects`, branch refs and HEAD, an append-only staging index,
//! linear history with fast-forward merges, and working tree checkout.
//!
//! All operations hang off [`areas::repository::Repository`].

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
