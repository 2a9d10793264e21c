use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::envelope;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::DecodeError;
use bytes::Bytes;

/// Produces the payload carried inside the envelope
pub trait Packable {
    fn serialize(&self) -> Bytes;
}

/// Rebuilds an object from a payload (the envelope has already been stripped)
pub trait Unpackable {
    fn deserialize(payload: &[u8]) -> Result<Self, DecodeError>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn display(&self) -> String;

    /// Objects that must already be stored before this one may be stored
    fn references(&self) -> Vec<&ObjectId> {
        Vec::new()
    }

    /// Full envelope: `<type> <len>\0<payload>`
    fn encode(&self) -> Bytes {
        envelope::encode(self.object_type(), &self.serialize())
    }

    fn object_id(&self) -> ObjectId {
        envelope::digest(&self.encode())
    }
}

/// Closed set of stored object kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectBox {
    Blob(Blob),
    Tree(Tree),
    Commit(Commit),
}

impl ObjectBox {
    /// Decode a full envelope into the matching variant
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let (object_type, payload) = envelope::decode(data)?;

        match object_type {
            ObjectType::Blob => Ok(ObjectBox::Blob(Blob::deserialize(payload)?)),
            ObjectType::Tree => Ok(ObjectBox::Tree(Tree::deserialize(payload)?)),
            ObjectType::Commit => Ok(ObjectBox::Commit(Commit::deserialize(payload)?)),
        }
    }

    pub fn into_blob(self) -> Result<Blob, DecodeError> {
        match self {
            ObjectBox::Blob(blob) => Ok(blob),
            other => Err(other.mismatch(ObjectType::Blob)),
        }
    }

    pub fn into_tree(self) -> Result<Tree, DecodeError> {
        match self {
            ObjectBox::Tree(tree) => Ok(tree),
            other => Err(other.mismatch(ObjectType::Tree)),
        }
    }

    pub fn into_commit(self) -> Result<Commit, DecodeError> {
        match self {
            ObjectBox::Commit(commit) => Ok(commit),
            other => Err(other.mismatch(ObjectType::Commit)),
        }
    }

    fn mismatch(&self, expected: ObjectType) -> DecodeError {
        DecodeError::TypeMismatch {
            expected,
            found: self.object_type(),
        }
    }
}

impl Packable for ObjectBox {
    fn serialize(&self) -> Bytes {
        match self {
            ObjectBox::Blob(blob) => blob.serialize(),
            ObjectBox::Tree(tree) => tree.serialize(),
            ObjectBox::Commit(commit) => commit.serialize(),
        }
    }
}

impl Object for ObjectBox {
    fn object_type(&self) -> ObjectType {
        match self {
            ObjectBox::Blob(_) => ObjectType::Blob,
            ObjectBox::Tree(_) => ObjectType::Tree,
            ObjectBox::Commit(_) => ObjectType::Commit,
        }
    }

    fn display(&self) -> String {
        match self {
            ObjectBox::Blob(blob) => blob.display(),
            ObjectBox::Tree(tree) => tree.display(),
            ObjectBox::Commit(commit) => commit.display(),
        }
    }

    fn references(&self) -> Vec<&ObjectId> {
        match self {
            ObjectBox::Blob(blob) => blob.references(),
            ObjectBox::Tree(tree) => tree.references(),
            ObjectBox::Commit(commit) => commit.references(),
        }
    }
}
