//! Staging area
//!
//! The index records which blob each path should hold in the next commit.
//! It is persisted as an append-only log: staging a path appends one line,
//! even when the path is already present. Consumers read it through
//! [`Index::snapshot`], which keeps the last hash recorded for every path.
//!
//! ## Locking
//!
//! Appends and rewrites are performed by callers holding the repository lock.
//! Rewrites go through a temporary file and a rename.

use crate::artifacts::core::atomic_file::write_atomically;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::errors::{Error, Result};
use std::collections::HashMap;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (`.metadata/index`)
    path: Box<Path>,
    /// Records in file order, duplicates included
    entries: Vec<IndexEntry>,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk
    ///
    /// A missing index file is an empty index. Any line that does not parse
    /// fails the whole load with [`Error::IndexCorrupt`] (1-based line).
    pub fn rehydrate(&mut self) -> Result<()> {
        self.entries.clear();

        let content = match std::fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(Error::io(&self.path)(e)),
        };
        let content = String::from_utf8(content).map_err(|_| Error::IndexCorrupt {
            line: 0,
            reason: "index is not valid UTF-8".to_string(),
        })?;

        for (number, line) in content.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let entry = IndexEntry::parse_line(line).map_err(|reason| Error::IndexCorrupt {
                line: number + 1,
                reason,
            })?;
            self.entries.push(entry);
        }

        tracing::trace!(entries = self.entries.len(), "index loaded");
        Ok(())
    }

    /// Append a record for `entry` to the log
    ///
    /// A log whose last line lacks its newline gets one first, so the new
    /// record never fuses with it.
    pub fn stage(&mut self, entry: IndexEntry) -> Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(Error::io(&self.path))?;

        let mut line = entry.to_line();
        if !ends_with_newline(&mut file).map_err(Error::io(&self.path))? {
            line.insert(0, '\n');
        }
        file.write_all(line.as_bytes())
            .map_err(Error::io(&self.path))?;

        tracing::debug!(path = %entry.display_name(), oid = %entry.oid, "staged");
        self.entries.push(entry);

        Ok(())
    }

    /// Every record in file order, duplicates included
    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One entry per path: the position of its first record, the hash of its last
    pub fn snapshot(&self) -> Vec<IndexEntry> {
        let mut positions: HashMap<&PathBuf, usize> = HashMap::new();
        let mut snapshot: Vec<IndexEntry> = Vec::new();

        for entry in &self.entries {
            match positions.get(&entry.name) {
                Some(&position) => snapshot[position].oid = entry.oid.clone(),
                None => {
                    positions.insert(&entry.name, snapshot.len());
                    snapshot.push(entry.clone());
                }
            }
        }

        snapshot
    }

    /// Atomically replace the whole log with `entries`
    pub fn replace_all(&mut self, entries: Vec<IndexEntry>) -> Result<()> {
        let content = entries.iter().map(IndexEntry::to_line).collect::<String>();
        write_atomically(&self.path, content.as_bytes())?;

        tracing::debug!(entries = entries.len(), "index rewritten");
        self.entries = entries;

        Ok(())
    }
}

/// Whether `file` is empty or its last byte is `\n`
fn ends_with_newline(file: &mut std::fs::File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
