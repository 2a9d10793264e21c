//! Stateful repository components
//!
//! - `database`: content-addressed object store
//! - `index`: staging area
//! - `refs`: HEAD and branch pointers
//! - `repository`: the explicit handle tying the areas together
//! - `workspace`: working tree file access

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
