//! Tree object
//!
//! Trees represent directory snapshots. They contain entries for files (blobs)
//! and subdirectories (other trees), in the order they were added.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <type> <hash>\t<name>\n`
//!
//! Entries are not sorted: two trees holding the same entries in a different
//! order have different hashes.
//!
//! ## Tree Building
//!
//! [`TreeBuilder`] turns the flat list of staged paths into nested trees and
//! hands every subtree to a store callback before its parent.

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::DecodeError;
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeEntry {
    /// Single path segment
    pub name: String,
    pub oid: ObjectId,
    pub mode: EntryMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn add_entry(&mut self, name: impl Into<String>, oid: ObjectId, mode: EntryMode) {
        self.entries.push(TreeEntry::new(name.into(), oid, mode));
    }

    pub fn entries(&self) -> impl Iterator<Item = &TreeEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> impl Iterator<Item = TreeEntry> {
        self.entries.into_iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether `name` can be stored as a single tree entry name
pub fn is_valid_entry_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0', '\n', '\t'])
}

impl Packable for Tree {
    fn serialize(&self) -> Bytes {
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "{} {} {}\t{}\n",
                    entry.mode.as_str(),
                    entry.mode.object_type().as_str(),
                    entry.oid,
                    entry.name
                )
            })
            .collect::<String>()
            .into()
    }
}

impl Unpackable for Tree {
    fn deserialize(payload: &[u8]) -> Result<Self, DecodeError> {
        let payload = std::str::from_utf8(payload).map_err(|_| DecodeError::InvalidUtf8)?;
        let mut tree = Tree::default();

        if payload.is_empty() {
            return Ok(tree);
        }

        let body = payload
            .strip_suffix('\n')
            .ok_or_else(|| DecodeError::MalformedTreeEntry("missing final newline".into()))?;

        for line in body.split('\n') {
            let malformed = || DecodeError::MalformedTreeEntry(line.to_string());

            let (fields, name) = line.split_once('\t').ok_or_else(malformed)?;
            let mut fields = fields.split(' ');
            let (Some(mode), Some(tag), Some(oid), None) =
                (fields.next(), fields.next(), fields.next(), fields.next())
            else {
                return Err(malformed());
            };

            let mode = EntryMode::try_from(mode)?;
            if ObjectType::try_from(tag)? != mode.object_type() {
                return Err(malformed());
            }
            if !is_valid_entry_name(name) {
                return Err(malformed());
            }

            tree.add_entry(name, ObjectId::try_parse(oid)?, mode);
        }

        Ok(tree)
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn display(&self) -> String {
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "{} {} {}\t{}",
                    entry.mode.as_str(),
                    entry.mode.object_type(),
                    entry.oid,
                    entry.name
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    fn references(&self) -> Vec<&ObjectId> {
        self.entries.iter().map(|entry| &entry.oid).collect()
    }
}

#[derive(Debug, Clone)]
enum BuilderNode {
    File(ObjectId),
    Directory(TreeBuilder),
}

/// Nested, insertion-ordered view of staged paths
///
/// A path staged twice keeps the position of its first appearance and the
/// hash of its last one. A later path that needs a directory where a file was
/// staged (or the other way round) replaces it.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    children: Vec<(String, BuilderNode)>,
}

impl TreeBuilder {
    pub fn build<'e>(entries: impl IntoIterator<Item = &'e IndexEntry>) -> Self {
        let mut root = Self::default();

        for entry in entries {
            root.insert(&entry.segments(), &entry.oid);
        }

        root
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn insert(&mut self, segments: &[&str], oid: &ObjectId) {
        let Some((first, rest)) = segments.split_first() else {
            return;
        };
        let position = self.children.iter().position(|(name, _)| name == first);

        if rest.is_empty() {
            let node = BuilderNode::File(oid.clone());
            match position {
                Some(index) => self.children[index].1 = node,
                None => self.children.push((first.to_string(), node)),
            }
            return;
        }

        let index = match position {
            Some(index) => {
                if let BuilderNode::File(_) = self.children[index].1 {
                    self.children[index].1 = BuilderNode::Directory(Self::default());
                }
                index
            }
            None => {
                self.children
                    .push((first.to_string(), BuilderNode::Directory(Self::default())));
                self.children.len() - 1
            }
        };

        if let BuilderNode::Directory(subtree) = &mut self.children[index].1 {
            subtree.insert(rest, oid);
        }
    }

    /// Materialize the trees depth-first
    ///
    /// `store` sees children before parents, so every tree it receives only
    /// references objects it has already been given (or blobs stored at
    /// staging time). Returns the id of the root tree.
    pub fn write<F, E>(&self, store: &mut F) -> Result<ObjectId, E>
    where
        F: FnMut(&Tree) -> Result<ObjectId, E>,
    {
        let mut tree = Tree::default();

        for (name, node) in &self.children {
            match node {
                BuilderNode::File(oid) => tree.add_entry(name, oid.clone(), EntryMode::File),
                BuilderNode::Directory(subtree) => {
                    let oid = subtree.write(store)?;
                    tree.add_entry(name, oid, EntryMode::Directory);
                }
            }
        }

        store(&tree)
    }
}
