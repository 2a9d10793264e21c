//! Data structures and algorithms
//!
//! - `branch`: Branch names and HEAD targets
//! - `checkout`: Tree snapshots materialized by checkout and merge
//! - `core`: Repository layout, locking and atomic writes
//! - `index`: Index line format
//! - `log`: History traversal and rendering
//! - `merge`: Ancestry and fast-forward outcomes
//! - `objects`: Object model and envelope codec
//! - `status`: Change classification

pub mod branch;
pub mod checkout;
pub mod core;
pub mod index;
pub mod log;
pub mod merge;
pub mod objects;
pub mod status;
