use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::DecodeError;

/// Kind of object a tree entry points at
#[derive(Debug, Clone, Copy, Eq, Ord, Default, PartialEq, PartialOrd, Hash)]
pub enum EntryMode {
    #[default]
    File,
    Directory,
}

impl EntryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryMode::File => "100644",
            EntryMode::Directory => "40000",
        }
    }

    pub fn object_type(&self) -> ObjectType {
        match self {
            EntryMode::File => ObjectType::Blob,
            EntryMode::Directory => ObjectType::Tree,
        }
    }

    pub fn is_tree(&self) -> bool {
        matches!(self, EntryMode::Directory)
    }
}

impl TryFrom<&str> for EntryMode {
    type Error = DecodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "100644" => Ok(EntryMode::File),
            "40000" => Ok(EntryMode::Directory),
            _ => Err(DecodeError::MalformedTreeEntry(format!(
                "unknown mode {value}"
            ))),
        }
    }
}
