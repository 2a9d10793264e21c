//! Commit object
//!
//! Commits represent snapshots of the repository at specific points in time.
//! They contain:
//! - A tree object ID (directory snapshot)
//! - At most one parent commit ID (history is a set of linear chains)
//! - Author and committer information
//! - Commit message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> +0000
//! committer <name> <email> <timestamp> +0000
//!
//! <commit message>
//! ```
//!
//! The `parent` line is omitted for root commits. The message is stored
//! verbatim.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::DecodeError;
use bytes::Bytes;
use chrono::{DateTime, Utc};

/// Offset marker written after every timestamp; times are kept in UTC
const UTC_OFFSET: &str = "+0000";

const DEFAULT_AUTHOR_NAME: &str = "John Doe";
const DEFAULT_AUTHOR_EMAIL: &str = "john@example.com";

/// Author or committer information
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    email: String,
    timestamp: DateTime<Utc>,
}

impl Author {
    /// Create a new author stamped with the current time
    pub fn new(name: String, email: String) -> Self {
        Self::new_with_timestamp(name, email, Utc::now())
    }

    pub fn new_with_timestamp(name: String, email: String, timestamp: DateTime<Utc>) -> Self {
        // sub-second precision is not representable on disk
        let timestamp = DateTime::from_timestamp(timestamp.timestamp(), 0).unwrap_or(timestamp);

        Author {
            name,
            email,
            timestamp,
        }
    }

    /// "Name <email@example.com>"
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// "Name <email> timestamp +0000"
    pub fn display(&self) -> String {
        format!(
            "{} <{}> {} {}",
            self.name,
            self.email,
            self.timestamp.timestamp(),
            UTC_OFFSET
        )
    }

    /// Load author information from environment variables
    ///
    /// Reads GIT_AUTHOR_NAME, GIT_AUTHOR_EMAIL, and optionally GIT_AUTHOR_DATE.
    /// Falls back to a placeholder identity when name or email is missing and
    /// to the current time when no date is provided.
    pub fn load_from_env() -> Self {
        let name = std::env::var("GIT_AUTHOR_NAME").ok();
        let email = std::env::var("GIT_AUTHOR_EMAIL").ok();
        let (name, email) = match (name, email) {
            (Some(name), Some(email)) => (name, email),
            (name, email) => {
                tracing::warn!("GIT_AUTHOR_NAME or GIT_AUTHOR_EMAIL not set, using default identity");
                (
                    name.unwrap_or_else(|| DEFAULT_AUTHOR_NAME.to_string()),
                    email.unwrap_or_else(|| DEFAULT_AUTHOR_EMAIL.to_string()),
                )
            }
        };

        let timestamp = std::env::var("GIT_AUTHOR_DATE").ok().and_then(|date_str| {
            DateTime::parse_from_rfc2822(&date_str)
                .or_else(|_| DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
                .ok()
        });

        match timestamp {
            Some(ts) => Author::new_with_timestamp(name, email, ts.with_timezone(&Utc)),
            None => Author::new(name, email),
        }
    }

    /// "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl TryFrom<&str> for Author {
    type Error = DecodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let malformed = || DecodeError::MalformedIdentity(value.to_string());

        // Split from the right: offset, then timestamp, then "name <email>"
        let mut parts = value.rsplitn(3, ' ');
        let (Some(offset), Some(timestamp), Some(identity)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        if offset != UTC_OFFSET {
            return Err(malformed());
        }
        let timestamp = timestamp
            .parse::<i64>()
            .ok()
            .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
            .ok_or_else(malformed)?;

        let identity = identity.strip_suffix('>').ok_or_else(malformed)?;
        let (name, email) = identity.rsplit_once('<').ok_or_else(malformed)?;
        let name = name.strip_suffix(' ').unwrap_or(name);

        Ok(Author {
            name: name.to_string(),
            email: email.to_string(),
            timestamp,
        })
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Parent commit ID (None for a root commit)
    parent: Option<ObjectId>,
    /// Tree object ID representing the directory snapshot
    tree_oid: ObjectId,
    author: Author,
    committer: Author,
    message: String,
}

impl Commit {
    pub fn new(
        parent: Option<ObjectId>,
        tree_oid: ObjectId,
        author: Author,
        committer: Author,
        message: String,
    ) -> Self {
        Commit {
            parent,
            tree_oid,
            author,
            committer,
            message,
        }
    }

    /// First line of the commit message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn committer(&self) -> &Author {
        &self.committer
    }

    fn header_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("tree {}", self.tree_oid)];
        if let Some(parent) = &self.parent {
            lines.push(format!("parent {parent}"));
        }
        lines.push(format!("author {}", self.author.display()));
        lines.push(format!("committer {}", self.committer.display()));
        lines
    }
}

impl Packable for Commit {
    fn serialize(&self) -> Bytes {
        let mut content = self.header_lines().join("\n");
        content.push_str("\n\n");
        content.push_str(&self.message);

        content.into()
    }
}

impl Unpackable for Commit {
    fn deserialize(payload: &[u8]) -> Result<Self, DecodeError> {
        let content = std::str::from_utf8(payload).map_err(|_| DecodeError::InvalidUtf8)?;
        let (headers, message) = content
            .split_once("\n\n")
            .ok_or(DecodeError::MissingCommitField("message separator"))?;

        let mut tree_oid = None;
        let mut parent = None;
        let mut author = None;
        let mut committer = None;

        for line in headers.split('\n') {
            let (key, value) = line
                .split_once(' ')
                .ok_or_else(|| DecodeError::UnknownCommitField(line.to_string()))?;

            let duplicate = match key {
                "tree" => tree_oid.replace(ObjectId::try_parse(value)?).is_some(),
                "parent" => parent.replace(ObjectId::try_parse(value)?).is_some(),
                "author" => author.replace(Author::try_from(value)?).is_some(),
                "committer" => committer.replace(Author::try_from(value)?).is_some(),
                _ => return Err(DecodeError::UnknownCommitField(key.to_string())),
            };
            if duplicate {
                return Err(DecodeError::DuplicateCommitField(key.to_string()));
            }
        }

        Ok(Commit {
            parent,
            tree_oid: tree_oid.ok_or(DecodeError::MissingCommitField("tree"))?,
            author: author.ok_or(DecodeError::MissingCommitField("author"))?,
            committer: committer.ok_or(DecodeError::MissingCommitField("committer"))?,
            message: message.to_string(),
        })
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        let mut lines = self.header_lines();
        lines.push(String::new());
        lines.push(self.message.to_string());

        lines.join("\n")
    }

    fn references(&self) -> Vec<&ObjectId> {
        std::iter::once(&self.tree_oid)
            .chain(self.parent.as_ref())
            .collect()
    }
}
