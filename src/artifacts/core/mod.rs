//! Shared building blocks used by every area of the repository
//!
//! - `layout`: names of the files and directories under the metadata dir
//! - `lock`: repository-wide advisory lock for mutating operations
//! - `atomic_file`: write-to-temp-then-rename helper

pub mod atomic_file;
pub mod layout;
pub mod lock;
