//! Object store
//!
//! Content-addressed, write-once storage keyed by object id. An object with
//! id `aabbcc...` lives at `objects/aa/bbcc...` and holds the full envelope,
//! uncompressed.
//!
//! Storing is idempotent: an object whose file already exists is not written
//! again. Objects must be stored after everything they reference, so a tree
//! or commit pointing at a missing object is refused.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::envelope;
use crate::artifacts::objects::object::{Object, ObjectBox};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::artifacts::objects::{MIN_PREFIX_LENGTH, OBJECT_ID_LENGTH};
use crate::artifacts::core::atomic_file::write_atomically;
use crate::errors::{DecodeError, Error, Result};
use bytes::Bytes;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.object_path(object_id).is_file()
    }

    /// Persist `object` and return its id
    pub fn store(&self, object: &impl Object) -> Result<ObjectId> {
        if let Some(missing) = object
            .references()
            .into_iter()
            .find(|reference| !self.contains(reference))
        {
            return Err(Error::ObjectNotFound(missing.clone()));
        }

        let content = object.encode();
        let object_id = envelope::digest(&content);
        let object_path = self.object_path(&object_id);

        if object_path.exists() {
            tracing::debug!(oid = %object_id, "object already stored");
            return Ok(object_id);
        }

        write_atomically(&object_path, &content)?;
        tracing::debug!(oid = %object_id, kind = %object.object_type(), "stored object");

        Ok(object_id)
    }

    /// Raw envelope bytes of a stored object
    pub fn load(&self, object_id: &ObjectId) -> Result<Bytes> {
        let object_path = self.object_path(object_id);

        match std::fs::read(&object_path) {
            Ok(content) => Ok(content.into()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::ObjectNotFound(object_id.clone()))
            }
            Err(e) => Err(Error::io(&object_path)(e)),
        }
    }

    /// Read, verify and decode a stored object
    ///
    /// The digest of the stored bytes must match `object_id`.
    pub fn parse_object(&self, object_id: &ObjectId) -> Result<ObjectBox> {
        let content = self.load(object_id)?;

        let actual = envelope::digest(&content);
        if &actual != object_id {
            return Err(Error::CorruptObject {
                oid: object_id.clone(),
                source: DecodeError::DigestMismatch {
                    actual: actual.to_string(),
                },
            });
        }

        tracing::trace!(oid = %object_id, "read object");
        ObjectBox::decode(&content).map_err(Error::corrupt(object_id))
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> Result<Blob> {
        self.parse_object(object_id)?
            .into_blob()
            .map_err(Error::corrupt(object_id))
    }

    pub fn parse_object_as_tree(&self, object_id: &ObjectId) -> Result<Tree> {
        self.parse_object(object_id)?
            .into_tree()
            .map_err(Error::corrupt(object_id))
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> Result<Commit> {
        self.parse_object(object_id)?
            .into_commit()
            .map_err(Error::corrupt(object_id))
    }

    /// Find all objects whose id starts with the given hex prefix
    ///
    /// Prefixes shorter than two characters scan every fan-out directory.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> Result<Vec<ObjectId>> {
        let prefix = prefix.to_ascii_lowercase();
        let mut matches = Vec::new();

        let directories = match prefix.get(..2) {
            Some(dir_name) => vec![dir_name.to_string()],
            None => (0..=255u8).map(|i| format!("{i:02x}")).collect(),
        };

        for dir_name in directories {
            let dir_path = self.path.join(&dir_name);
            if !dir_path.is_dir() {
                continue;
            }

            for entry in std::fs::read_dir(&dir_path).map_err(Error::io(&dir_path))? {
                let entry = entry.map_err(Error::io(&dir_path))?;
                let full_oid = format!("{}{}", dir_name, entry.file_name().to_string_lossy());

                if full_oid.starts_with(&prefix)
                    && let Ok(oid) = ObjectId::try_parse(full_oid)
                {
                    matches.push(oid);
                }
            }
        }

        matches.sort();
        Ok(matches)
    }

    /// Resolve a full id or a unique abbreviated one to a stored object id
    pub fn resolve(&self, revision: &str) -> Result<ObjectId> {
        if revision.len() == OBJECT_ID_LENGTH
            && let Ok(oid) = ObjectId::try_parse(revision)
        {
            return match self.contains(&oid) {
                true => Ok(oid),
                false => Err(Error::ObjectNotFound(oid)),
            };
        }

        let is_hex_prefix = revision.len() >= MIN_PREFIX_LENGTH
            && revision.len() < OBJECT_ID_LENGTH
            && revision.chars().all(|c| c.is_ascii_hexdigit());
        if !is_hex_prefix {
            return Err(Error::RefNotFound {
                name: revision.to_string(),
                reason: "not a branch or object id".to_string(),
            });
        }

        let mut candidates = self.find_objects_by_prefix(revision)?;
        match candidates.len() {
            0 => Err(Error::RefNotFound {
                name: revision.to_string(),
                reason: "no object with this prefix".to_string(),
            }),
            1 => Ok(candidates.remove(0)),
            _ => Err(Error::AmbiguousObjectId {
                prefix: revision.to_string(),
                candidates,
            }),
        }
    }
}
