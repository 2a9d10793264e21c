use crate::errors::{Error, Result};
use fake::rand;
use std::io::Write;
use std::path::Path;

/// Replace `path` with `content` in a single rename
///
/// The content is written to a sibling temporary file first, so a reader
/// never sees a partially written file. Missing parent directories are
/// created.
pub fn write_atomically(path: &Path, content: &[u8]) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| Error::InvalidPath(path.to_path_buf()))?;
    std::fs::create_dir_all(parent).map_err(Error::io(parent))?;

    let temp_path = parent.join(generate_temp_name());
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .map_err(Error::io(&temp_path))?;

    file.write_all(content)
        .and_then(|_| file.sync_all())
        .map_err(Error::io(&temp_path))?;
    drop(file);

    std::fs::rename(&temp_path, path).map_err(|source| {
        let _ = std::fs::remove_file(&temp_path);
        Error::IoFailure {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn generate_temp_name() -> String {
    format!("tmp-{}", rand::random::<u32>())
}
