use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::layout::{HEADS_DIR, REFS_DIR, SYMREF_PREFIX};
use crate::artifacts::objects::object_id::ObjectId;

/// What HEAD points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTarget {
    /// `ref: refs/heads/<name>`
    Symbolic(BranchName),
    /// A literal commit id
    Detached(ObjectId),
}

impl HeadTarget {
    /// Content of the HEAD file for this target
    pub fn to_raw(&self) -> String {
        match self {
            HeadTarget::Symbolic(name) => {
                format!("{SYMREF_PREFIX}{REFS_DIR}/{HEADS_DIR}/{name}\n")
            }
            HeadTarget::Detached(oid) => format!("{oid}\n"),
        }
    }

    /// Parse the content of a HEAD file
    pub fn parse(raw: &str) -> Result<Self, String> {
        let raw = raw.trim_end_matches('\n');

        match raw.strip_prefix(SYMREF_PREFIX) {
            Some(target) => {
                let prefix = format!("{REFS_DIR}/{HEADS_DIR}/");
                let name = target
                    .strip_prefix(&prefix)
                    .ok_or_else(|| format!("symbolic ref outside {prefix}: '{target}'"))?;
                BranchName::try_parse(name)
                    .map(HeadTarget::Symbolic)
                    .map_err(|e| e.to_string())
            }
            None => ObjectId::try_parse(raw)
                .map(HeadTarget::Detached)
                .map_err(|e| e.to_string()),
        }
    }

    pub fn branch(&self) -> Option<&BranchName> {
        match self {
            HeadTarget::Symbolic(name) => Some(name),
            HeadTarget::Detached(_) => None,
        }
    }
}
