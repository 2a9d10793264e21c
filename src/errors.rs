//! Error taxonomy
//!
//! Every core operation returns [`Result`], whose error side is the closed
//! [`Error`] enum. Codec failures are reported separately as [`DecodeError`]
//! so that the object model can be used without a repository; the object
//! store wraps them into [`Error::CorruptObject`] together with the offending
//! object id.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons an encoded object (or one of its fields) could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("missing NUL byte after the object header")]
    MissingNul,
    #[error("malformed object header '{0}'")]
    MalformedHeader(String),
    #[error("unknown object type '{0}'")]
    UnknownType(String),
    #[error("payload size mismatch (header says {expected}, found {found})")]
    SizeMismatch { expected: usize, found: usize },
    #[error("expected a {expected} object, found a {found}")]
    TypeMismatch {
        expected: ObjectType,
        found: ObjectType,
    },
    #[error("digest mismatch (stored bytes hash to {actual})")]
    DigestMismatch { actual: String },
    #[error("malformed tree entry '{0}'")]
    MalformedTreeEntry(String),
    #[error("unknown commit field '{0}'")]
    UnknownCommitField(String),
    #[error("missing commit field '{0}'")]
    MissingCommitField(&'static str),
    #[error("duplicate commit field '{0}'")]
    DuplicateCommitField(String),
    #[error("malformed identity line '{0}'")]
    MalformedIdentity(String),
    #[error("invalid object id '{0}'")]
    InvalidObjectId(String),
    #[error("payload is not valid UTF-8")]
    InvalidUtf8,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("not a mini-git repository (or any of the parent directories): {0}")]
    NotARepository(PathBuf),
    #[error("object {0} not found")]
    ObjectNotFound(ObjectId),
    #[error("object {oid} is corrupt: {source}")]
    CorruptObject {
        oid: ObjectId,
        #[source]
        source: DecodeError,
    },
    #[error("object id prefix '{prefix}' is ambiguous ({} candidates)", candidates.len())]
    AmbiguousObjectId {
        prefix: String,
        candidates: Vec<ObjectId>,
    },
    #[error("ref {name} not found or unreadable: {reason}")]
    RefNotFound { name: String, reason: String },
    #[error("branch '{0}' not found")]
    BranchNotFound(String),
    #[error("a branch named '{0}' already exists")]
    BranchAlreadyExists(String),
    #[error("'{0}' is not a valid branch name")]
    InvalidBranchName(String),
    #[error(
        "cannot fast-forward {current} to {}: not a descendant",
        .target.as_ref().map_or_else(|| "an unborn branch".to_string(), ObjectId::to_string)
    )]
    NonFastForward {
        current: ObjectId,
        target: Option<ObjectId>,
    },
    #[error("index is corrupt at line {line}: {reason}")]
    IndexCorrupt { line: usize, reason: String },
    #[error("commit history is corrupt: cycle detected at {0}")]
    CorruptHistory(ObjectId),
    #[error("path '{0}' is outside the working tree")]
    InvalidPath(PathBuf),
    #[error("I/O failure at {path}: {source}")]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Adapter for `map_err` that attaches the path being accessed
    pub fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
        move |source| Error::IoFailure {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn corrupt(oid: &ObjectId) -> impl FnOnce(DecodeError) -> Error + '_ {
        move |source| Error::CorruptObject {
            oid: oid.clone(),
            source,
        }
    }
}
