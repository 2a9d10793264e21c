use colored::Colorize;
use std::path::PathBuf;

const LABEL_WIDTH: usize = 8;

/// Difference between the index and the HEAD tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IndexChangeType {
    Added,
    Modified,
}

/// Difference between the working tree and the HEAD tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WorkspaceChangeType {
    Modified,
    Untracked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileChangeType {
    Index(IndexChangeType),
    Workspace(WorkspaceChangeType),
}

impl From<&FileChangeType> for &str {
    fn from(change: &FileChangeType) -> Self {
        match change {
            FileChangeType::Index(IndexChangeType::Added) => "new file:   ",
            FileChangeType::Index(IndexChangeType::Modified) => "modified:   ",
            FileChangeType::Workspace(WorkspaceChangeType::Modified) => "modified:   ",
            FileChangeType::Workspace(WorkspaceChangeType::Untracked) => "",
        }
    }
}

impl std::fmt::Display for FileChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        let colored_str = match self {
            FileChangeType::Index(_) => label.green(),
            FileChangeType::Workspace(_) => label.red(),
        };
        write!(f, "{:>width$}{}", "", colored_str, width = LABEL_WIDTH)
    }
}

/// One reported path
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileChange {
    pub path: PathBuf,
    pub change: FileChangeType,
}

impl FileChange {
    pub fn new(path: PathBuf, change: FileChangeType) -> Self {
        FileChange { path, change }
    }

    fn display_path(&self) -> String {
        self.path
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl std::fmt::Display for FileChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let path = match self.change {
            FileChangeType::Index(_) => self.display_path().green(),
            FileChangeType::Workspace(_) => self.display_path().red(),
        };
        write!(f, "{}{}", self.change, path)
    }
}
