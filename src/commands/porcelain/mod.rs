//! Porcelain commands (user-facing operations)
//!
//! Each command is an `impl Repository` block returning a typed result; the
//! binary decides how to print it.
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `commit`: Create a new commit
//! - `status`: Show working tree status
//! - `log`: Walk commit history
//! - `branch`: Create or list branches
//! - `checkout`: Switch branches or detach HEAD
//! - `merge`: Fast-forward to another branch

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod status;
