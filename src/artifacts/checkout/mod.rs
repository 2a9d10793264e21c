//! Tree snapshots used to materialize a commit
//!
//! Checkout and fast-forward merge both replace the working tree with the
//! content of a target tree. The target is flattened and every blob is loaded
//! into a [`snapshot::Snapshot`] before the working tree is touched, so a
//! missing or corrupt object aborts without any filesystem change.

pub mod snapshot;
