use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use crate::artifacts::core::layout::HEAD;
use crate::errors::{Error, Result};
use std::sync::LazyLock;

static INVALID_BRANCH_NAME: LazyLock<Option<regex::Regex>> =
    LazyLock::new(|| regex::Regex::new(INVALID_BRANCH_NAME_REGEX).ok());

/// Validated branch name, possibly hierarchical (`feature/login`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        let is_invalid = match INVALID_BRANCH_NAME.as_ref() {
            Some(re) => re.is_match(&name),
            None => true,
        };
        if name.is_empty() || name == HEAD || is_invalid {
            return Err(Error::InvalidBranchName(name));
        }

        Ok(Self(name))
    }

    /// Path of the branch file relative to `refs/heads`
    pub fn as_ref_path(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
